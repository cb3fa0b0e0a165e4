use async_trait::async_trait;
use mongodb::bson::Document;
use std::sync::Arc;
use thiserror::Error;

/// Failure inside the persistence gateway.
///
/// Every variant surfaces to API clients as a 500 with a generic message;
/// the detail stays in the logs.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The driver rejected or failed the operation.
    #[error("database operation failed: {0}")]
    Backend(#[from] mongodb::error::Error),
    /// The store could not be reached at all.
    #[error("database unavailable: {0}")]
    Unavailable(String),
}

/// Gateway between the routing layer and the document store.
///
/// Implementations own the connection details. Handlers receive one shared
/// trait object at startup and never mutate it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts one document into `collection` and returns the identifier the
    /// store generated for it.
    async fn create(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Returns up to `limit` documents matching `filter` (empty filter = all)
    /// in the store's natural order. Documents include the store's `_id`.
    async fn list(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError>;

    /// Names of the collections currently present in the database.
    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// Handle shared by every request handler.
pub type SharedStore = Arc<dyn DocumentStore>;
