//! Invariant guards: a workspace must never lose its last member or its
//! last admin.
//!
//! Guards run after authorization and before the mutation is issued, over a
//! member snapshot listed after the authorization check. Under concurrent
//! requests the snapshot can be stale; that race is accepted (the external
//! store is the only concurrency control). Keeping the guards as pure
//! functions over the snapshot lets a stricter caller substitute an
//! optimistic-version or serialized snapshot without touching the rules.

use crate::models::Member;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GuardError {
    #[error("cannot delete the last member in the workspace")]
    LastMember,
    #[error("cannot downgrade the last admin in the workspace")]
    LastAdmin,
}

fn is_last_admin(target: &Member, snapshot: &[Member]) -> bool {
    if !target.is_admin() {
        return false;
    }
    let admins: Vec<&Member> = snapshot.iter().filter(|m| m.is_admin()).collect();
    admins.len() == 1 && admins[0].id == target.id
}

/// May `target` be deleted, given the workspace member snapshot?
pub fn check_member_delete(target: &Member, snapshot: &[Member]) -> Result<(), GuardError> {
    if snapshot.len() == 1 {
        return Err(GuardError::LastMember);
    }
    if is_last_admin(target, snapshot) {
        return Err(GuardError::LastAdmin);
    }
    Ok(())
}

/// May `target`'s role be changed away from its current value? Only admins
/// can be "downgraded" here; callers reject same-role assignments before
/// this point, so a target that is the sole admin always loses admin.
pub fn check_role_change(target: &Member, snapshot: &[Member]) -> Result<(), GuardError> {
    if is_last_admin(target, snapshot) {
        return Err(GuardError::LastAdmin);
    }
    Ok(())
}
