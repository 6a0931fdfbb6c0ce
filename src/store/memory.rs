// In-memory implementation of the store capabilities.
//
// Used by the test suite and by the binary when no external platform is
// configured. Documents keep insertion order so "newest first" ordering is
// deterministic under equal timestamps.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::models::User;

use super::{BlobStore, DocumentStore, Filter, ListResult, SessionStore, StoreError};

const SESSION_SECRET_LEN: usize = 48;

#[derive(Debug, Clone)]
struct StoredUser {
    user: User,
    password_digest: String,
}

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
    blobs: RwLock<HashMap<Uuid, Vec<u8>>>,
    users: RwLock<HashMap<Uuid, StoredUser>>,
    sessions: RwLock<HashMap<String, Uuid>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_lock<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, StoreError> {
        lock.read().map_err(|_| StoreError::Backend("lock poisoned".into()))
    }

    fn write_lock<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, StoreError> {
        lock.write().map_err(|_| StoreError::Backend("lock poisoned".into()))
    }

    fn digest(email: &str, password: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(email.as_bytes());
        hasher.update(b":");
        hasher.update(password.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    fn new_secret() -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_SECRET_LEN)
            .map(char::from)
            .collect()
    }
}

/// Compare two JSON values for ordering. RFC 3339 strings compare as
/// timestamps so differing fractional precision cannot reorder them.
fn cmp_values(a: &Value, b: &Value) -> Option<std::cmp::Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => {
            match (
                DateTime::parse_from_rfc3339(a),
                DateTime::parse_from_rfc3339(b),
            ) {
                (Ok(a), Ok(b)) => Some(a.cmp(&b)),
                _ => Some(a.cmp(b)),
            }
        }
        (Value::Number(a), Value::Number(b)) => {
            a.as_f64().and_then(|a| b.as_f64().and_then(|b| a.partial_cmp(&b)))
        }
        _ => None,
    }
}

fn matches(doc: &Value, filter: &Filter) -> bool {
    match filter {
        Filter::Eq(field, value) => doc.get(field) == Some(value),
        Filter::Ne(field, value) => doc.get(field) != Some(value),
        Filter::Gt(field, value) => doc
            .get(field)
            .and_then(|v| cmp_values(v, value))
            .is_some_and(|o| o == std::cmp::Ordering::Greater),
        Filter::Gte(field, value) => doc
            .get(field)
            .and_then(|v| cmp_values(v, value))
            .is_some_and(|o| o != std::cmp::Ordering::Less),
        Filter::Lt(field, value) => doc
            .get(field)
            .and_then(|v| cmp_values(v, value))
            .is_some_and(|o| o == std::cmp::Ordering::Less),
        Filter::ContainsId(field, ids) => doc
            .get(field)
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s).ok())
            .is_some_and(|id| ids.contains(&id)),
        // Ordering and limiting are applied after matching
        Filter::OrderDesc(_) | Filter::Limit(_) => true,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: Uuid) -> Result<Option<Value>, StoreError> {
        let collections = Self::read_lock(&self.collections)?;
        let id = Value::String(id.to_string());
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.get("id") == Some(&id)))
            .cloned())
    }

    async fn list(&self, collection: &str, filters: &[Filter]) -> Result<ListResult, StoreError> {
        let collections = Self::read_lock(&self.collections)?;
        let mut documents: Vec<Value> = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| filters.iter().all(|f| matches(d, f)))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        let total = documents.len() as u64;

        for filter in filters {
            match filter {
                Filter::OrderDesc(field) => documents.sort_by(|a, b| {
                    let (av, bv) = (a.get(field), b.get(field));
                    match (av, bv) {
                        (Some(av), Some(bv)) => {
                            cmp_values(bv, av).unwrap_or(std::cmp::Ordering::Equal)
                        }
                        _ => std::cmp::Ordering::Equal,
                    }
                }),
                Filter::Limit(n) => documents.truncate(*n),
                _ => {}
            }
        }

        Ok(ListResult { documents, total })
    }

    async fn create(&self, collection: &str, fields: Value) -> Result<Value, StoreError> {
        let Value::Object(mut doc) = fields else {
            return Err(StoreError::Backend("document must be a JSON object".into()));
        };
        doc.entry("id")
            .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
        doc.entry("created_at")
            .or_insert_with(|| json!(Utc::now()));

        let doc = Value::Object(doc);
        let mut collections = Self::write_lock(&self.collections)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn update(&self, collection: &str, id: Uuid, patch: Value) -> Result<Value, StoreError> {
        let Value::Object(patch) = patch else {
            return Err(StoreError::Backend("patch must be a JSON object".into()));
        };
        let mut collections = Self::write_lock(&self.collections)?;
        let id_value = Value::String(id.to_string());
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.get("id") == Some(&id_value)))
            .ok_or_else(|| StoreError::NotFound(format!("{collection}/{id}")))?;

        if let Value::Object(fields) = doc {
            for (key, value) in patch {
                fields.insert(key, value);
            }
        }
        Ok(doc.clone())
    }

    async fn delete(&self, collection: &str, id: Uuid) -> Result<(), StoreError> {
        let mut collections = Self::write_lock(&self.collections)?;
        let id_value = Value::String(id.to_string());
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound(format!("{collection}/{id}")))?;
        let before = docs.len();
        docs.retain(|d| d.get("id") != Some(&id_value));
        if docs.len() == before {
            return Err(StoreError::NotFound(format!("{collection}/{id}")));
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for MemoryStore {
    async fn store(&self, bytes: Vec<u8>) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        Self::write_lock(&self.blobs)?.insert(id, bytes);
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<Vec<u8>, StoreError> {
        Self::read_lock(&self.blobs)?
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("blob/{id}")))
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<User, StoreError> {
        let email = email.to_ascii_lowercase();
        let mut users = Self::write_lock(&self.users)?;
        if users.values().any(|u| u.user.email == email) {
            return Err(StoreError::Conflict(format!("email {email} already registered")));
        }
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.clone(),
        };
        users.insert(
            user.id,
            StoredUser {
                user: user.clone(),
                password_digest: Self::digest(&email, password),
            },
        );
        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<String, StoreError> {
        let email = email.to_ascii_lowercase();
        let digest = Self::digest(&email, password);
        let user_id = {
            let users = Self::read_lock(&self.users)?;
            users
                .values()
                .find(|u| u.user.email == email && u.password_digest == digest)
                .map(|u| u.user.id)
                .ok_or(StoreError::InvalidCredentials)?
        };
        let secret = Self::new_secret();
        Self::write_lock(&self.sessions)?.insert(secret.clone(), user_id);
        Ok(secret)
    }

    async fn resolve(&self, secret: &str) -> Result<Option<User>, StoreError> {
        let user_id = match Self::read_lock(&self.sessions)?.get(secret) {
            Some(id) => *id,
            None => return Ok(None),
        };
        Ok(Self::read_lock(&self.users)?
            .get(&user_id)
            .map(|u| u.user.clone()))
    }

    async fn revoke(&self, secret: &str) -> Result<(), StoreError> {
        Self::write_lock(&self.sessions)?.remove(secret);
        Ok(())
    }

    async fn get_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(Self::read_lock(&self.users)?.get(&id).map(|u| u.user.clone()))
    }
}
