use uuid::Uuid;

use crate::models::{collections, Member};
use crate::store::{DocumentStore, Filter, StoreError};

/// Look up the unique member record binding `user_id` to `workspace_id`.
///
/// Absence is not a fault: `Ok(None)` means the user is not a member and the
/// caller must treat that as "not authorized". Every workspace-scoped
/// handler goes through this before touching anything else.
pub async fn resolve_member(
    store: &dyn DocumentStore,
    workspace_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Member>, StoreError> {
    let result = store
        .list(
            collections::MEMBERS,
            &[
                Filter::eq("workspace_id", workspace_id.to_string()),
                Filter::eq("user_id", user_id.to_string()),
            ],
        )
        .await?;

    result
        .documents
        .into_iter()
        .next()
        .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
        .transpose()
}

/// List every member of a workspace. The invariant guards operate on this
/// snapshot; it must be fetched after the authorization check so the guard
/// does not act on counts older than the decision to mutate.
pub async fn workspace_members(
    store: &dyn DocumentStore,
    workspace_id: Uuid,
) -> Result<Vec<Member>, StoreError> {
    let result = store
        .list(
            collections::MEMBERS,
            &[Filter::eq("workspace_id", workspace_id.to_string())],
        )
        .await?;
    let (members, _) = result.typed::<Member>()?;
    Ok(members)
}
