use axum::{extract::State, Extension};
use uuid::Uuid;

use crate::middleware::Actor;
use crate::models::{collections, DocumentList, Member, Workspace};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::Filter;

/// GET /api/v1/workspaces - workspaces the actor belongs to, newest first.
/// No memberships is an empty list, not an error.
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<DocumentList<Workspace>> {
    let memberships = state
        .documents
        .list(
            collections::MEMBERS,
            &[Filter::eq("user_id", actor.user.id.to_string())],
        )
        .await?;

    if memberships.total == 0 {
        return Ok(ApiResponse::success(DocumentList::empty()));
    }

    let (members, _) = memberships.typed::<Member>()?;
    let workspace_ids: Vec<Uuid> = members.iter().map(|m| m.workspace_id).collect();

    let result = state
        .documents
        .list(
            collections::WORKSPACES,
            &[
                Filter::OrderDesc("created_at"),
                Filter::ContainsId("id", workspace_ids),
            ],
        )
        .await?;
    let (documents, total) = result.typed::<Workspace>()?;

    Ok(ApiResponse::success(DocumentList { documents, total }))
}
