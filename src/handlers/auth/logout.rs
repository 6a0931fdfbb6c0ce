use axum::{
    extract::State,
    http::{header::SET_COOKIE, HeaderMap},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::ApiError;
use crate::middleware::session::extract_session_cookie;
use crate::response::ApiResponse;
use crate::state::AppState;

use super::utils::clear_session_cookie;

/// POST /api/v1/auth/logout - revoke the session (if any) and clear the
/// cookie. Succeeds even without a valid session so clients can always
/// reset their state.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    if let Some(secret) = extract_session_cookie(&headers) {
        state.sessions.revoke(&secret).await?;
    }

    let mut response = ApiResponse::success(json!({ "success": true })).into_response();
    response.headers_mut().append(SET_COOKIE, clear_session_cookie()?);
    Ok(response)
}
