use axum::{
    extract::{Query, State},
    Extension,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::Actor;
use crate::models::{collections, DocumentList, Member, PopulatedMember};
use crate::response::{ApiResponse, ApiResult};
use crate::services::membership::resolve_member;
use crate::state::AppState;
use crate::store::Filter;

use super::utils::UNAUTHORIZED;

#[derive(Debug, Deserialize)]
pub struct MembersQuery {
    pub workspace_id: Uuid,
}

/// GET /api/v1/members?workspace_id=x - all members of a workspace, each
/// populated with the user's name and email (any member may list)
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<MembersQuery>,
) -> ApiResult<DocumentList<PopulatedMember>> {
    resolve_member(state.documents.as_ref(), query.workspace_id, actor.user.id)
        .await?
        .ok_or_else(|| ApiError::unauthorized(UNAUTHORIZED))?;

    let result = state
        .documents
        .list(
            collections::MEMBERS,
            &[Filter::eq("workspace_id", query.workspace_id.to_string())],
        )
        .await?;
    let (members, total) = result.typed::<Member>()?;

    let mut documents = Vec::with_capacity(members.len());
    for member in members {
        let user = state.sessions.get_user(member.user_id).await?.ok_or_else(|| {
            tracing::error!("member {} references unknown user {}", member.id, member.user_id);
            ApiError::upstream("An error occurred while processing your request.")
        })?;
        documents.push(PopulatedMember {
            member,
            name: user.name,
            email: user.email,
        });
    }

    Ok(ApiResponse::success(DocumentList { documents, total }))
}
