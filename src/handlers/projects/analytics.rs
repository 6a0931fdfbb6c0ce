use axum::{
    extract::{Path, State},
    Extension,
};
use chrono::Utc;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::response::{ApiResponse, ApiResult};
use crate::services::analytics::{aggregate, AnalyticsReport, AnalyticsScope};
use crate::services::membership::resolve_member;
use crate::state::AppState;

use super::utils::{fetch_project, UNAUTHORIZED};

/// GET /api/v1/projects/:project_id/analytics - month-over-month task
/// report scoped to one project (any member of its workspace)
pub async fn analytics(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<AnalyticsReport> {
    let project = fetch_project(&state, project_id).await?;

    let member = resolve_member(state.documents.as_ref(), project.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized(UNAUTHORIZED))?;

    let report = aggregate(
        state.documents.as_ref(),
        AnalyticsScope::Project(project_id),
        member.id,
        Utc::now(),
    )
    .await
    .map_err(|e| {
        tracing::error!("analytics aggregation failed for project {}: {}", project_id, e);
        ApiError::not_found("Analytics not found.")
    })?;

    Ok(ApiResponse::success(report))
}
