//! In-memory document store.
//!
//! A Firestore-shaped CRUD sink: named collections of JSON documents with
//! generated ids and server-side timestamps. Every operation returns a typed
//! `Result` instead of an ad hoc success/error object. The store is a pure
//! persistence sink; no business rules live here.

use std::collections::HashMap;

use serde_json::{Map, Value};
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Collection names shared by every module that writes to the store.
pub mod collections {
    pub const USERS: &str = "users";
    pub const VEHICLES: &str = "vehicles";
    pub const BOOKINGS: &str = "bookings";
    pub const REVIEWS: &str = "reviews";
    pub const PAYMENTS: &str = "payments";
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document not found: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("documents must be JSON objects")]
    NotAnObject,

    #[error("timestamp formatting failed: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl StoreError {
    fn not_found(collection: &str, id: &str) -> Self {
        Self::NotFound {
            collection: collection.to_string(),
            id: id.to_string(),
        }
    }
}

/// Thread-safe collection/document map. Documents are JSON objects carrying
/// an `id` field plus `created_at`/`updated_at` RFC 3339 timestamps stamped
/// by the store.
#[derive(Debug, Default)]
pub struct DocumentStore {
    inner: RwLock<HashMap<String, HashMap<String, Value>>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under a fresh UUIDv7 id. Returns the id.
    pub async fn insert(&self, collection: &str, document: Value) -> Result<String, StoreError> {
        let id = Uuid::now_v7().to_string();
        self.set(collection, &id, document).await?;
        Ok(id)
    }

    /// Insert or replace a document under an explicit id.
    pub async fn set(&self, collection: &str, id: &str, document: Value) -> Result<(), StoreError> {
        let mut object = into_object(document)?;
        let now = timestamp()?;
        object.insert("id".to_string(), Value::String(id.to_string()));
        object
            .entry("created_at".to_string())
            .or_insert_with(|| Value::String(now.clone()));
        object.insert("updated_at".to_string(), Value::String(now));

        let mut inner = self.inner.write().await;
        inner
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), Value::Object(object));
        tracing::debug!(collection, id, "document written");
        Ok(())
    }

    /// Fetch a single document.
    pub async fn get(&self, collection: &str, id: &str) -> Result<Value, StoreError> {
        let inner = self.inner.read().await;
        inner
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned()
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    /// Merge `patch`'s top-level fields into an existing document and bump
    /// `updated_at`.
    pub async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<(), StoreError> {
        let patch = into_object(patch)?;
        let now = timestamp()?;

        let mut inner = self.inner.write().await;
        let document = inner
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::not_found(collection, id))?;
        if let Value::Object(object) = document {
            for (key, value) in patch {
                object.insert(key, value);
            }
            // id is not patchable
            object.insert("id".to_string(), Value::String(id.to_string()));
            object.insert("updated_at".to_string(), Value::String(now));
        }
        tracing::debug!(collection, id, "document updated");
        Ok(())
    }

    /// Remove a document.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .get_mut(collection)
            .and_then(|docs| docs.remove(id))
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(collection, id))
    }

    /// All documents in a collection, newest first.
    pub async fn list(&self, collection: &str) -> Vec<Value> {
        let inner = self.inner.read().await;
        let mut documents: Vec<Value> = inner
            .get(collection)
            .map(|docs| docs.values().cloned().collect())
            .unwrap_or_default();
        // RFC 3339 strings order chronologically when compared as text.
        documents.sort_by(|a, b| {
            let key = |doc: &Value| {
                doc.get("created_at")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            key(b).cmp(&key(a))
        });
        documents
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>, StoreError> {
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(StoreError::NotAnObject),
    }
}

fn timestamp() -> Result<String, StoreError> {
    Ok(OffsetDateTime::now_utc().format(&Rfc3339)?)
}
