use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::Actor;
use crate::models::{collections, MemberRole};
use crate::response::{ApiResponse, ApiResult};
use crate::services::guards::check_role_change;
use crate::services::membership::workspace_members;
use crate::services::policy::check_role_assignment;
use crate::state::AppState;

use super::utils::{authorize_against, fetch_target};

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub role: MemberRole,
}

/// PATCH /api/v1/members/:member_id - change a member's role.
///
/// Order matters: authorization, then the role-assignment policy rules,
/// then the last-admin guard over a member snapshot fetched after the
/// authorization passed, then the write.
pub async fn update(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(member_id): Path<Uuid>,
    Json(body): Json<UpdateMemberRequest>,
) -> ApiResult<Value> {
    let target = fetch_target(&state, member_id).await?;
    let actor_member = authorize_against(&state, &actor, &target).await?;

    check_role_assignment(&actor_member, &target, body.role)?;

    let snapshot = workspace_members(state.documents.as_ref(), target.workspace_id).await?;
    check_role_change(&target, &snapshot)?;

    state
        .documents
        .update(collections::MEMBERS, member_id, json!({ "role": body.role }))
        .await?;

    Ok(ApiResponse::success(json!({ "id": target.id })))
}
