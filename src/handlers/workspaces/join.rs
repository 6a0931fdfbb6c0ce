use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::{collections, MemberRole, Workspace};
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;
use crate::store::fetch_typed;

#[derive(Debug, Deserialize)]
pub struct JoinRequest {
    pub code: String,
}

/// POST /api/v1/workspaces/:workspace_id/join - join via invite code as a
/// MEMBER-role member
pub async fn join(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(workspace_id): Path<Uuid>,
    Json(body): Json<JoinRequest>,
) -> ApiResult<Workspace> {
    let existing = resolve_member(state.documents.as_ref(), workspace_id, actor.user.id).await?;
    if existing.is_some() {
        return Err(ApiError::validation("Already a member."));
    }

    let workspace: Workspace =
        fetch_typed(state.documents.as_ref(), collections::WORKSPACES, workspace_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Workspace not found."))?;

    if workspace.invite_code != body.code {
        return Err(ApiError::validation("Invalid invite code."));
    }

    state
        .documents
        .create(
            collections::MEMBERS,
            json!({
                "user_id": actor.user.id.to_string(),
                "workspace_id": workspace_id.to_string(),
                "role": MemberRole::Member,
            }),
        )
        .await?;

    Ok(ApiResponse::success(workspace))
}
