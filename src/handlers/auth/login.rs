use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

use super::utils::{session_cookie, validate_email};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/login - open a session for existing credentials
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    validate_email(&body.email)?;
    if body.password.is_empty() {
        return Err(ApiError::validation("Password is required."));
    }

    let secret = state.sessions.login(body.email.trim(), &body.password).await?;
    let user = state
        .sessions
        .resolve(&secret)
        .await?
        .ok_or_else(|| ApiError::upstream("Session was issued but could not be resolved."))?;

    let mut response = ApiResponse::success(user).into_response();
    response.headers_mut().append(SET_COOKIE, session_cookie(&secret)?);
    Ok(response)
}
