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
use crate::state::AppState;

use super::utils::require_member;

/// GET /api/v1/workspaces/:workspace_id/analytics - month-over-month task
/// report for the whole workspace (any member)
pub async fn analytics(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(workspace_id): Path<Uuid>,
) -> ApiResult<AnalyticsReport> {
    let member = require_member(&state, workspace_id, actor.user.id).await?;

    let report = aggregate(
        state.documents.as_ref(),
        AnalyticsScope::Workspace(workspace_id),
        member.id,
        Utc::now(),
    )
    .await
    .map_err(|e| {
        tracing::error!("analytics aggregation failed for workspace {}: {}", workspace_id, e);
        ApiError::not_found("Analytics not found.")
    })?;

    Ok(ApiResponse::success(report))
}
