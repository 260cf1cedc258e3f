//! In-memory stores for tests and local development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::store::{BlobStore, DocumentStore, Filter, StoreError};

fn lock_poisoned<T>(_: std::sync::PoisonError<T>) -> StoreError {
    StoreError::Backend("lock poisoned".to_string())
}

/// HashMap-backed `DocumentStore`. Collections are created on first use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, HashMap<String, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create(
        &self,
        collection: &str,
        id: &str,
        document: Value,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().map_err(lock_poisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        Ok(())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        let collections = self.collections.lock().map_err(lock_poisoned)?;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn query(&self, collection: &str, filter: &Filter) -> Result<Vec<Value>, StoreError> {
        let collections = self.collections.lock().map_err(lock_poisoned)?;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.values()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn update(
        &self,
        collection: &str,
        id: &str,
        document: Value,
    ) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().map_err(lock_poisoned)?;
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        match docs.get_mut(id) {
            Some(slot) => {
                *slot = document;
                Ok(())
            }
            None => Err(StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }),
        }
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let mut collections = self.collections.lock().map_err(lock_poisoned)?;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}

/// HashMap-backed `BlobStore` serving `memory://` URLs.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, (Vec<u8>, String)>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoreError> {
        let mut blobs = self.blobs.lock().map_err(lock_poisoned)?;
        blobs.insert(key.to_string(), (bytes, content_type.to_string()));
        Ok(key.to_string())
    }

    async fn download_url(&self, key: &str) -> Result<String, StoreError> {
        let blobs = self.blobs.lock().map_err(lock_poisoned)?;
        if blobs.contains_key(key) {
            Ok(format!("memory://{key}"))
        } else {
            Err(StoreError::NotFound {
                collection: "blobs".to_string(),
                id: key.to_string(),
            })
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().map_err(lock_poisoned)?;
        blobs.remove(key);
        Ok(())
    }
}
