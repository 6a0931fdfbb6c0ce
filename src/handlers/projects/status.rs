use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde_json::json;

use crate::models::collections;
use crate::state::AppState;
use crate::store::Filter;

const SERVICE: &str = "projects-api";

/// GET /api/v1/projects/status - stateless health probe for this API area.
/// The only endpoint besides `/health` that skips the membership resolver;
/// it performs one lightweight store read to verify the platform answers.
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let now = Utc::now();

    match state
        .documents
        .list(collections::PROJECTS, &[Filter::Limit(1)])
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "operational",
                "service": SERVICE,
                "timestamp": now,
            })),
        ),
        Err(e) => {
            tracing::error!("status check failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": "degraded",
                    "service": SERVICE,
                    "error": e.to_string(),
                    "timestamp": now,
                })),
            )
        }
    }
}
