use axum::Extension;

use crate::middleware::Actor;
use crate::models::User;
use crate::response::{ApiResponse, ApiResult};

/// GET /api/v1/auth/current - the authenticated actor's profile
pub async fn current(Extension(actor): Extension<Actor>) -> ApiResult<User> {
    Ok(ApiResponse::success(actor.user))
}
