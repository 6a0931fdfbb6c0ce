use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public view of an authenticated user, as resolved by the session store.
/// Credentials never leave the store; this is the only shape handlers see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
