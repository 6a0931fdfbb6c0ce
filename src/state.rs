use std::sync::Arc;

use crate::store::{BlobStore, DocumentStore, MemoryStore, SessionStore};

/// Shared handler state: the external-platform capabilities, injected so the
/// whole request path can run against the in-memory store in tests.
#[derive(Clone)]
pub struct AppState {
    pub documents: Arc<dyn DocumentStore>,
    pub blobs: Arc<dyn BlobStore>,
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// State backed entirely by one in-memory store.
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self {
            documents: store.clone(),
            blobs: store.clone(),
            sessions: store,
        }
    }
}
