use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::Actor;
use crate::models::collections;
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::{Filter, StoreError};

use super::utils::require_admin;

/// DELETE /api/v1/workspaces/:workspace_id - remove the workspace and
/// everything scoped to it (ADMIN only)
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(workspace_id): Path<Uuid>,
) -> ApiResult<Value> {
    require_admin(&state, workspace_id, actor.user.id).await?;

    for collection in [collections::TASKS, collections::PROJECTS, collections::MEMBERS] {
        cascade_delete(&state, collection, workspace_id).await?;
    }
    state
        .documents
        .delete(collections::WORKSPACES, workspace_id)
        .await?;

    Ok(ApiResponse::success(json!({ "id": workspace_id })))
}

/// Delete every document in `collection` belonging to the workspace.
async fn cascade_delete(
    state: &AppState,
    collection: &str,
    workspace_id: Uuid,
) -> Result<(), StoreError> {
    let result = state
        .documents
        .list(
            collection,
            &[Filter::eq("workspace_id", workspace_id.to_string())],
        )
        .await?;

    for doc in result.documents {
        let Some(id) = doc.get("id").and_then(Value::as_str).and_then(|s| Uuid::parse_str(s).ok())
        else {
            continue;
        };
        state.documents.delete(collection, id).await?;
    }
    Ok(())
}
