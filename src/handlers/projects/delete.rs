use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::collections;
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;
use crate::store::Filter;

use super::utils::{fetch_project, UNAUTHORIZED};

/// DELETE /api/v1/projects/:project_id - remove a project and its tasks
/// (any member of the project's workspace)
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Value> {
    let project = fetch_project(&state, project_id).await?;

    resolve_member(state.documents.as_ref(), project.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized(UNAUTHORIZED))?;

    let tasks = state
        .documents
        .list(
            collections::TASKS,
            &[Filter::eq("project_id", project_id.to_string())],
        )
        .await?;
    for doc in tasks.documents {
        let Some(id) = doc.get("id").and_then(Value::as_str).and_then(|s| Uuid::parse_str(s).ok())
        else {
            continue;
        };
        state.documents.delete(collections::TASKS, id).await?;
    }

    state
        .documents
        .delete(collections::PROJECTS, project_id)
        .await?;

    Ok(ApiResponse::success(json!({ "id": project_id })))
}
