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

use super::utils::{session_cookie, validate_email, validate_name, validate_password};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/register - create a user and open a session
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<Response, ApiError> {
    validate_name(&body.name)?;
    validate_email(&body.email)?;
    validate_password(&body.password)?;

    let user = state
        .sessions
        .register(body.name.trim(), body.email.trim(), &body.password)
        .await?;
    let secret = state.sessions.login(body.email.trim(), &body.password).await?;

    let mut response = ApiResponse::created(user).into_response();
    response.headers_mut().append(SET_COOKIE, session_cookie(&secret)?);
    Ok(response)
}
