use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::{collections, Member};
use crate::services::membership::resolve_member;
use crate::services::policy::is_authorized_default;
use crate::state::AppState;
use crate::store::fetch_typed;

pub const UNAUTHORIZED: &str =
    "Unauthorized. Only admins or the member themselves can perform this action.";
pub const MEMBER_NOT_FOUND: &str = "Member not found. Please provide a valid member ID.";

/// Fetch the member a mutation targets, 404 if the id does not resolve.
pub async fn fetch_target(state: &AppState, member_id: Uuid) -> Result<Member, ApiError> {
    fetch_typed(state.documents.as_ref(), collections::MEMBERS, member_id)
        .await?
        .ok_or_else(|| ApiError::not_found(MEMBER_NOT_FOUND))
}

/// Resolve the actor's member record in the target's workspace and apply the
/// default policy: self-service or ADMIN.
pub async fn authorize_against(
    state: &AppState,
    actor: &Actor,
    target: &Member,
) -> Result<Member, ApiError> {
    let member = resolve_member(state.documents.as_ref(), target.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized(UNAUTHORIZED))?;

    if !is_authorized_default(&member, target) {
        return Err(ApiError::unauthorized(UNAUTHORIZED));
    }
    Ok(member)
}
