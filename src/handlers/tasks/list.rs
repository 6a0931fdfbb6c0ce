use axum::{
    extract::{Query, State},
    Extension,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::{collections, DocumentList, Task, TaskStatus};
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;
use crate::store::Filter;

#[derive(Debug, Deserialize)]
pub struct TasksQuery {
    pub workspace_id: Uuid,
    pub project_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
    pub status: Option<TaskStatus>,
    pub due_before: Option<DateTime<Utc>>,
}

/// GET /api/v1/tasks?workspace_id=x - tasks of a workspace, newest first,
/// with optional equality and due-date filters (any member)
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<TasksQuery>,
) -> ApiResult<DocumentList<Task>> {
    resolve_member(state.documents.as_ref(), query.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unauthorized. You do not have access to this resource."))?;

    let mut filters = vec![Filter::eq("workspace_id", query.workspace_id.to_string())];
    if let Some(project_id) = query.project_id {
        filters.push(Filter::eq("project_id", project_id.to_string()));
    }
    if let Some(assignee_id) = query.assignee_id {
        filters.push(Filter::eq("assignee_id", assignee_id.to_string()));
    }
    if let Some(status) = query.status {
        filters.push(Filter::eq("status", status.as_str()));
    }
    if let Some(due_before) = query.due_before {
        filters.push(Filter::Lt("due_date", due_before.to_rfc3339().into()));
    }
    filters.push(Filter::OrderDesc("created_at"));

    let result = state.documents.list(collections::TASKS, &filters).await?;
    let (documents, total) = result.typed::<Task>()?;

    Ok(ApiResponse::success(DocumentList { documents, total }))
}
