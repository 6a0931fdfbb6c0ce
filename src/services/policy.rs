//! Authorization policy: pure predicates over member records.
//!
//! No store access happens here; handlers resolve the actor and target
//! first and the policy decides.

use crate::models::{Member, MemberRole};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("the member already has the specified role")]
    AlreadyHasRole,
    #[error("only admins can assign the admin role")]
    AdminRequired,
    #[error("members cannot promote themselves to admin")]
    SelfPromotion,
}

/// An actor may act on a target member when the actor IS the target
/// (self-service, e.g. leaving a workspace) or the actor's role is in
/// `allowed_roles`.
pub fn is_authorized(actor: &Member, target: &Member, allowed_roles: &[MemberRole]) -> bool {
    actor.id == target.id || allowed_roles.contains(&actor.role)
}

/// Default authorization: self-service or ADMIN.
pub fn is_authorized_default(actor: &Member, target: &Member) -> bool {
    is_authorized(actor, target, &[MemberRole::Admin])
}

/// Role-assignment rules, checked in order with first match winning:
///
/// 1. assigning the role the target already holds is rejected;
/// 2. only admins may assign ADMIN;
/// 3. nobody may assign ADMIN to themselves, admins included. An admin can
///    promote anyone else; the self-target block guards against a redundant
///    self-grant, and self-demotion is deliberately not blocked here.
pub fn check_role_assignment(
    actor: &Member,
    target: &Member,
    new_role: MemberRole,
) -> Result<(), PolicyError> {
    if target.role == new_role {
        return Err(PolicyError::AlreadyHasRole);
    }
    if new_role == MemberRole::Admin && actor.role != MemberRole::Admin {
        return Err(PolicyError::AdminRequired);
    }
    if actor.id == target.id && new_role == MemberRole::Admin {
        return Err(PolicyError::SelfPromotion);
    }
    Ok(())
}
