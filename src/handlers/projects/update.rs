use axum::{
    extract::{Multipart, Path, State},
    Extension,
};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::handlers::forms::{read_form, resolve_image_url};
use crate::middleware::Actor;
use crate::models::{collections, Project};
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;
use crate::store::StoreError;

use super::utils::{fetch_project, validate_project_name, UNAUTHORIZED};

/// PATCH /api/v1/projects/:project_id - rename and/or re-image (any member
/// of the project's workspace)
pub async fn update(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(project_id): Path<Uuid>,
    multipart: Multipart,
) -> ApiResult<Project> {
    let project = fetch_project(&state, project_id).await?;

    resolve_member(state.documents.as_ref(), project.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized(UNAUTHORIZED))?;

    let form = read_form(multipart).await?;
    let mut patch = Map::new();
    if let Some(name) = form.field("name") {
        patch.insert("name".into(), json!(validate_project_name(name)?));
    }
    if form.image.is_some() {
        patch.insert("image_url".into(), json!(resolve_image_url(&state, form.image).await?));
    }

    let doc = state
        .documents
        .update(collections::PROJECTS, project_id, Value::Object(patch))
        .await?;
    let project: Project = serde_json::from_value(doc).map_err(StoreError::from)?;

    Ok(ApiResponse::success(project))
}
