use axum::{
    extract::{Multipart, Path, State},
    Extension,
};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::handlers::forms::{read_form, resolve_image_url};
use crate::middleware::Actor;
use crate::models::{collections, Workspace};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::store::StoreError;

use super::utils::require_admin;

/// PATCH /api/v1/workspaces/:workspace_id - rename and/or re-image (ADMIN only)
pub async fn update(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(workspace_id): Path<Uuid>,
    multipart: Multipart,
) -> ApiResult<Workspace> {
    require_admin(&state, workspace_id, actor.user.id).await?;

    let form = read_form(multipart).await?;
    let mut patch = Map::new();
    if form.field("name").is_some() {
        patch.insert("name".into(), json!(form.require("name")?));
    }
    if form.image.is_some() {
        patch.insert("image_url".into(), json!(resolve_image_url(&state, form.image).await?));
    }

    let doc = state
        .documents
        .update(collections::WORKSPACES, workspace_id, Value::Object(patch))
        .await?;
    let workspace: Workspace = serde_json::from_value(doc).map_err(StoreError::from)?;

    Ok(ApiResponse::success(workspace))
}
