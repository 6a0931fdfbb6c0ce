use axum::{
    extract::{Path, State},
    Extension,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::Project;
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;

use super::utils::{fetch_project, UNAUTHORIZED};

/// GET /api/v1/projects/:project_id - fetch one project (any member of its
/// workspace)
pub async fn get(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Project> {
    let project = fetch_project(&state, project_id).await?;

    resolve_member(state.documents.as_ref(), project.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized(UNAUTHORIZED))?;

    Ok(ApiResponse::success(project))
}
