use axum::{
    extract::{Query, State},
    Extension,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::{collections, DocumentList, Project};
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;
use crate::store::Filter;

use super::utils::NOT_MEMBER;

#[derive(Debug, Deserialize)]
pub struct ProjectsQuery {
    pub workspace_id: Uuid,
}

/// GET /api/v1/projects?workspace_id=x - projects of a workspace, newest
/// first (any member)
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<ProjectsQuery>,
) -> ApiResult<DocumentList<Project>> {
    resolve_member(state.documents.as_ref(), query.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::forbidden(NOT_MEMBER))?;

    let result = state
        .documents
        .list(
            collections::PROJECTS,
            &[
                Filter::eq("workspace_id", query.workspace_id.to_string()),
                Filter::OrderDesc("created_at"),
            ],
        )
        .await?;
    let (documents, total) = result.typed::<Project>()?;

    Ok(ApiResponse::success(DocumentList { documents, total }))
}
