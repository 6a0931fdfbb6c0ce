use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::Member;
use crate::services::membership::resolve_member;
use crate::state::AppState;

/// Random alphanumeric invite code (mixed case plus digits).
pub fn generate_invite_code(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Resolve the actor's membership or reject with 401. Workspace-scoped
/// reads use this; absence of a member record is "not authorized", never a
/// fault.
pub async fn require_member(
    state: &AppState,
    workspace_id: Uuid,
    user_id: Uuid,
) -> Result<Member, ApiError> {
    resolve_member(state.documents.as_ref(), workspace_id, user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Unauthorized. You do not have access to this resource."))
}

/// Resolve the actor's membership and require the ADMIN role. Workspace
/// mutation has no self-service exception.
pub async fn require_admin(
    state: &AppState,
    workspace_id: Uuid,
    user_id: Uuid,
) -> Result<Member, ApiError> {
    let member = require_member(state, workspace_id, user_id).await?;
    if !member.is_admin() {
        return Err(ApiError::unauthorized(
            "Unauthorized. You do not have access to this resource.",
        ));
    }
    Ok(member)
}
