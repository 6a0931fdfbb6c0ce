use axum::{extract::Multipart, extract::State, Extension};
use serde_json::json;

use crate::config;
use crate::handlers::forms::{read_form, resolve_image_url};
use crate::middleware::Actor;
use crate::models::{collections, MemberRole, Workspace};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::StoreError;

use super::utils::generate_invite_code;

/// POST /api/v1/workspaces - create a workspace and bind the creator as its
/// single ADMIN member
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    multipart: Multipart,
) -> ApiResult<Workspace> {
    let form = read_form(multipart).await?;
    let name = form.require("name")?.to_string();
    let image_url = resolve_image_url(&state, form.image).await?;

    let invite_code = generate_invite_code(config::config().auth.invite_code_length);
    let doc = state
        .documents
        .create(
            collections::WORKSPACES,
            json!({
                "name": name,
                "user_id": actor.user.id.to_string(),
                "invite_code": invite_code,
                "image_url": image_url,
            }),
        )
        .await?;
    let workspace: Workspace = serde_json::from_value(doc).map_err(StoreError::from)?;

    state
        .documents
        .create(
            collections::MEMBERS,
            json!({
                "user_id": actor.user.id.to_string(),
                "workspace_id": workspace.id.to_string(),
                "role": MemberRole::Admin,
            }),
        )
        .await?;

    Ok(ApiResponse::success(workspace))
}
