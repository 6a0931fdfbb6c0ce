use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a member holds inside a workspace.
///
/// Closed enum so role checks can be matched exhaustively; serialized in the
/// uppercase wire form the clients expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberRole {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "MEMBER")]
    Member,
}

/// The binding of a user to a workspace with an assigned role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub user_id: Uuid,
    pub workspace_id: Uuid,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
}

impl Member {
    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }
}

/// Member enriched with the user's profile fields for list responses.
#[derive(Debug, Clone, Serialize)]
pub struct PopulatedMember {
    #[serde(flatten)]
    pub member: Member,
    pub name: String,
    pub email: String,
}
