use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{collections, Project};
use crate::state::AppState;
use crate::store::fetch_typed;

pub const UNAUTHORIZED: &str = "Unauthorized. You do not have access to this resource.";
pub const PROJECT_NOT_FOUND: &str = "Project not found. Please provide a valid project ID.";
pub const NOT_MEMBER: &str = "You are not a member of this workspace.";

const MAX_NAME_LEN: usize = 50;

pub async fn fetch_project(state: &AppState, project_id: Uuid) -> Result<Project, ApiError> {
    fetch_typed(state.documents.as_ref(), collections::PROJECTS, project_id)
        .await?
        .ok_or_else(|| ApiError::not_found(PROJECT_NOT_FOUND))
}

pub fn validate_project_name(name: &str) -> Result<&str, ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Project name is required."));
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(ApiError::validation("Project name must be at most 50 characters long."));
    }
    Ok(trimmed)
}
