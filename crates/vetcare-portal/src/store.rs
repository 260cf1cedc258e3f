//! Document and blob storage seams.
//!
//! The portal persists its records as JSON documents in named collections
//! and its rendered files (certificates, photos) as blobs. Both concerns
//! are traits so deployments can plug in their own backend; tests use the
//! in-memory implementation.

use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("documento no encontrado: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("error del almacenamiento: {0}")]
    Backend(String),
}

/// Field-equality filter for queries. An empty filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    pub conditions: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((name.into(), value.into()));
        self
    }

    /// Whether a document satisfies every condition.
    pub fn matches(&self, document: &Value) -> bool {
        self.conditions
            .iter()
            .all(|(name, value)| document.get(name) == Some(value))
    }
}

/// JSON document storage over named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document under the given id.
    async fn create(&self, collection: &str, id: &str, document: Value)
        -> Result<(), StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// All documents in the collection matching the filter.
    async fn query(&self, collection: &str, filter: &Filter) -> Result<Vec<Value>, StoreError>;

    /// Replace an existing document. Fails with `NotFound` if absent.
    async fn update(&self, collection: &str, id: &str, document: Value)
        -> Result<(), StoreError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

/// Binary file storage for rendered documents and photos.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store a blob under a key and return the stored key.
    async fn upload(&self, key: &str, bytes: Vec<u8>, content_type: &str)
        -> Result<String, StoreError>;

    /// A URL from which the blob can be fetched.
    async fn download_url(&self, key: &str) -> Result<String, StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;
}
