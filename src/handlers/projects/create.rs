use axum::{extract::Multipart, extract::State, Extension};
use serde_json::json;

use crate::error::ApiError;
use crate::handlers::forms::{read_form, resolve_image_url};
use crate::middleware::Actor;
use crate::models::{collections, Project};
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;
use crate::store::StoreError;

use super::utils::{validate_project_name, UNAUTHORIZED};

/// POST /api/v1/projects - create a project (any member of the workspace)
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    multipart: Multipart,
) -> ApiResult<Project> {
    let form = read_form(multipart).await?;
    let workspace_id = form.require_uuid("workspace_id")?;
    let name = validate_project_name(form.require("name")?)?.to_string();

    resolve_member(state.documents.as_ref(), workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized(UNAUTHORIZED))?;

    let image_url = resolve_image_url(&state, form.image).await?;

    let doc = state
        .documents
        .create(
            collections::PROJECTS,
            json!({
                "name": name,
                "workspace_id": workspace_id.to_string(),
                "image_url": image_url,
            }),
        )
        .await?;
    let project: Project = serde_json::from_value(doc).map_err(StoreError::from)?;

    Ok(ApiResponse::success(project))
}
