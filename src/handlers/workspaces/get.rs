use axum::{
    extract::{Path, State},
    Extension,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::{collections, Workspace};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::fetch_typed;

use super::utils::require_member;

/// GET /api/v1/workspaces/:workspace_id - fetch one workspace (any member)
pub async fn get(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(workspace_id): Path<Uuid>,
) -> ApiResult<Workspace> {
    require_member(&state, workspace_id, actor.user.id).await?;

    let workspace: Workspace =
        fetch_typed(state.documents.as_ref(), collections::WORKSPACES, workspace_id)
            .await?
            .ok_or_else(|| ApiError::not_found("Workspace not found."))?;

    Ok(ApiResponse::success(workspace))
}
