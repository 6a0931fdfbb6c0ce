use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::config;
use crate::error::ApiError;
use crate::models::User;
use crate::state::AppState;

/// The authenticated identity making the current request, resolved from the
/// session cookie and injected as a request extension.
#[derive(Clone, Debug)]
pub struct Actor {
    pub user: User,
}

/// Session middleware: extracts the session cookie, resolves it against the
/// session store and injects the [`Actor`]. Requests without a valid session
/// are rejected before any handler runs.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let secret = extract_session_cookie(request.headers())
        .ok_or_else(|| ApiError::unauthorized("Missing session."))?;

    let user = state
        .sessions
        .resolve(&secret)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid or expired session."))?;

    request.extensions_mut().insert(Actor { user });
    Ok(next.run(request).await)
}

/// Pull the session secret out of the Cookie header, if present.
pub fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    let cookie_name = &config::config().auth.cookie_name;
    let header = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;

    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == cookie_name && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}
