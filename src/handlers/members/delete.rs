use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::Actor;
use crate::models::collections;
use crate::response::{ApiResponse, ApiResult};
use crate::services::guards::check_member_delete;
use crate::services::membership::workspace_members;
use crate::state::AppState;

use super::utils::{authorize_against, fetch_target};

/// DELETE /api/v1/members/:member_id - remove a member from a workspace.
///
/// Self-service removal is allowed (leaving the workspace); the last-member
/// and last-admin guards run after authorization, on a snapshot fetched
/// after the check.
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(member_id): Path<Uuid>,
) -> ApiResult<Value> {
    let target = fetch_target(&state, member_id).await?;
    authorize_against(&state, &actor, &target).await?;

    let snapshot = workspace_members(state.documents.as_ref(), target.workspace_id).await?;
    check_member_delete(&target, &snapshot)?;

    state
        .documents
        .delete(collections::MEMBERS, member_id)
        .await?;

    Ok(ApiResponse::success(json!({ "id": target.id })))
}
