// Capability interfaces over the external platform.
//
// All persistence, session and blob state lives behind these traits. The
// handlers and services only ever receive them by reference, which keeps the
// policy/guard/analytics logic testable against the in-memory implementation.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::models::User;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Query filters understood by the document store. Comparisons on timestamp
/// fields operate on the RFC 3339 string form, which orders correctly.
#[derive(Debug, Clone)]
pub enum Filter {
    Eq(&'static str, Value),
    Ne(&'static str, Value),
    Gt(&'static str, Value),
    Gte(&'static str, Value),
    Lt(&'static str, Value),
    /// Set-containment on an identity field.
    ContainsId(&'static str, Vec<Uuid>),
    OrderDesc(&'static str),
    Limit(usize),
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<Value>) -> Self {
        Filter::Eq(field, value.into())
    }

    pub fn ne(field: &'static str, value: impl Into<Value>) -> Self {
        Filter::Ne(field, value.into())
    }
}

/// Result of a list query: the matching documents plus the total match count
/// (counted before any `Limit` is applied).
#[derive(Debug, Clone)]
pub struct ListResult {
    pub documents: Vec<Value>,
    pub total: u64,
}

impl ListResult {
    /// Deserialize every document into `T`, failing on the first malformed one.
    pub fn typed<T: serde::de::DeserializeOwned>(self) -> Result<(Vec<T>, u64), StoreError> {
        let total = self.total;
        let documents = self
            .documents
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?;
        Ok((documents, total))
    }
}

/// Document database owned by the external platform.
///
/// Documents are JSON objects. `create` fills in `id` and `created_at` when
/// the caller does not supply them; `update` merges the patch into the
/// existing document.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError>;
    async fn list(&self, collection: &str, filters: &[Filter]) -> Result<ListResult, StoreError>;
    async fn create(&self, collection: &str, fields: Value) -> Result<Value, StoreError>;
    async fn update(&self, collection: &str, id: Uuid, patch: Value) -> Result<Value, StoreError>;
    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), StoreError>;
}

/// Fetch a document by id and deserialize it, keeping "missing" distinct
/// from "malformed".
pub async fn fetch_typed<T: serde::de::DeserializeOwned>(
    store: &dyn DocumentStore,
    collection: &str,
    id: Uuid,
) -> Result<Option<T>, StoreError> {
    store
        .get(collection, id)
        .await?
        .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
        .transpose()
}

/// Image/file storage. Blobs are stored raw; the handlers re-encode them to
/// base64 data-URIs before persisting any reference in the document store.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(&self, bytes: Vec<u8>) -> Result<Uuid, StoreError>;
    async fn fetch(&self, id: Uuid) -> Result<Vec<u8>, StoreError>;
}

/// Identity and session provider. Sessions are opaque secrets delivered to
/// the client in an HTTP cookie; `resolve` maps a presented secret back to
/// the user, returning `None` for unknown or revoked secrets.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, StoreError>;
    async fn login(&self, email: &str, password: &str) -> Result<String, StoreError>;
    async fn resolve(&self, secret: &str) -> Result<Option<User>, StoreError>;
    async fn revoke(&self, secret: &str) -> Result<(), StoreError>;
    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;
}
