// HTTP API error types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::services::guards::GuardError;
use crate::services::policy::PolicyError;
use crate::store::StoreError;

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every error serializes to the uniform `{ "error": message, "status": n }`
/// body; upstream diagnostics are logged, never leaked verbatim.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    Validation(String),
    InvariantViolation(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error (external store/provider failures)
    Upstream(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::Validation(_) => 400,
            ApiError::InvariantViolation(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Upstream(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg) => msg,
            ApiError::InvariantViolation(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Upstream(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({
            "error": self.message(),
            "status": self.status_code(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        ApiError::InvariantViolation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        ApiError::Upstream(message.into())
    }
}

// Convert other error types to ApiError
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => {
                ApiError::not_found(format!("Not found: {what}"))
            }
            StoreError::InvalidCredentials => {
                ApiError::unauthorized("Invalid email or password.")
            }
            StoreError::Conflict(msg) => {
                tracing::warn!("store conflict: {}", msg);
                ApiError::validation("The resource already exists.")
            }
            StoreError::Malformed(e) => {
                tracing::error!("malformed document in store: {}", e);
                ApiError::upstream("An error occurred while processing your request.")
            }
            StoreError::Backend(msg) => {
                tracing::error!("store backend error: {}", msg);
                ApiError::upstream("An error occurred while processing your request.")
            }
        }
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::AlreadyHasRole => {
                ApiError::invariant("The member already has the specified role.")
            }
            PolicyError::AdminRequired => {
                ApiError::forbidden("Only admins can assign the admin role.")
            }
            PolicyError::SelfPromotion => {
                ApiError::forbidden("You cannot make yourself an admin.")
            }
        }
    }
}

impl From<GuardError> for ApiError {
    fn from(err: GuardError) -> Self {
        match err {
            GuardError::LastMember => {
                ApiError::invariant("Cannot delete the last member in the workspace.")
            }
            GuardError::LastAdmin => {
                ApiError::invariant("Cannot downgrade the last admin in the workspace.")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
