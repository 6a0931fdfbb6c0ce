use axum::http::HeaderValue;

use crate::config;
use crate::error::ApiError;

/// Build the Set-Cookie value delivering a session secret: path `/`,
/// HttpOnly, SameSite=Strict, 30-day max age by default; Secure outside
/// development.
pub fn session_cookie(secret: &str) -> Result<HeaderValue, ApiError> {
    let auth = &config::config().auth;
    let max_age = u64::from(auth.session_ttl_days) * 24 * 60 * 60;
    let secure = if auth.secure_cookies { "; Secure" } else { "" };
    let value = format!(
        "{}={}; Path=/; HttpOnly{}; SameSite=Strict; Max-Age={}",
        auth.cookie_name, secret, secure, max_age
    );
    HeaderValue::from_str(&value)
        .map_err(|_| ApiError::upstream("Failed to build session cookie."))
}

/// Set-Cookie value that expires the session cookie immediately.
pub fn clear_session_cookie() -> Result<HeaderValue, ApiError> {
    let auth = &config::config().auth;
    let secure = if auth.secure_cookies { "; Secure" } else { "" };
    let value = format!(
        "{}=; Path=/; HttpOnly{}; SameSite=Strict; Max-Age=0",
        auth.cookie_name, secure
    );
    HeaderValue::from_str(&value)
        .map_err(|_| ApiError::upstream("Failed to build session cookie."))
}

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || !trimmed.contains('@') {
        return Err(ApiError::validation("Please enter a valid email address."));
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ApiError> {
    if password.len() < 8 {
        return Err(ApiError::validation("Password must be at least 8 characters long."));
    }
    if password.len() > 256 {
        return Err(ApiError::validation("Password must be at most 256 characters long."));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ApiError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation("Name is required."));
    }
    if trimmed.len() > 100 {
        return Err(ApiError::validation("Name must be at most 100 characters long."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_carries_attributes() {
        let value = session_cookie("abc123").unwrap();
        let s = value.to_str().unwrap();
        assert!(s.contains("Path=/"));
        assert!(s.contains("HttpOnly"));
        assert!(s.contains("SameSite=Strict"));
        assert!(s.contains("Max-Age=2592000"));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let value = clear_session_cookie().unwrap();
        assert!(value.to_str().unwrap().contains("Max-Age=0"));
    }

    #[test]
    fn password_bounds() {
        assert!(validate_password("short").is_err());
        assert!(validate_password("long enough password").is_ok());
        assert!(validate_password(&"x".repeat(257)).is_err());
    }

    #[test]
    fn email_must_have_at_sign() {
        assert!(validate_email("nope").is_err());
        assert!(validate_email("ada@example.com").is_ok());
    }
}
