use async_trait::async_trait;
use dashmap::DashMap;
use mongodb::bson::{Bson, Document};
use uuid::Uuid;

use super::gateway::{DocumentStore, StoreError};

/// In-process gateway implementing the same contract as `MongoStore`.
///
/// Backs the test suite and local development without a running database.
/// Mirrors the behavior the routing layer depends on: every stored document
/// gains a generated `_id`, and listing returns documents in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    collections: DashMap<String, Vec<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .get(collection)
            .map(|documents| documents.len())
            .unwrap_or(0)
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn create(&self, collection: &str, mut document: Document) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        document.insert("_id", Bson::String(id.clone()));
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(id)
    }

    async fn list(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let documents = match self.collections.get(collection) {
            Some(entry) => entry
                .iter()
                .filter(|document| matches(document, &filter))
                .take(limit.max(0) as usize)
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Ok(documents)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .collections
            .iter()
            .map(|entry| entry.key().clone())
            .collect())
    }
}
