use axum::{
    extract::{Path, State},
    Extension,
};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::{collections, Task};
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;
use crate::store::fetch_typed;

/// GET /api/v1/tasks/:task_id - fetch one task (any member of its workspace)
pub async fn get(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Task> {
    let task: Task = fetch_typed(state.documents.as_ref(), collections::TASKS, task_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Task not found. Please provide a valid task ID."))?;

    resolve_member(state.documents.as_ref(), task.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unauthorized. You do not have access to this resource."))?;

    Ok(ApiResponse::success(task))
}
