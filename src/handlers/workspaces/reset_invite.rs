use axum::{
    extract::{Path, State},
    Extension,
};
use serde_json::json;
use uuid::Uuid;

use crate::config;
use crate::middleware::Actor;
use crate::models::{collections, Workspace};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::StoreError;

use super::utils::{generate_invite_code, require_admin};

/// POST /api/v1/workspaces/:workspace_id/reset-invite-code - rotate the
/// invite secret (ADMIN only); outstanding codes stop working immediately
pub async fn reset_invite(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(workspace_id): Path<Uuid>,
) -> ApiResult<Workspace> {
    require_admin(&state, workspace_id, actor.user.id).await?;

    let invite_code = generate_invite_code(config::config().auth.invite_code_length);
    let doc = state
        .documents
        .update(
            collections::WORKSPACES,
            workspace_id,
            json!({ "invite_code": invite_code }),
        )
        .await?;
    let workspace: Workspace = serde_json::from_value(doc).map_err(StoreError::from)?;

    Ok(ApiResponse::success(workspace))
}
