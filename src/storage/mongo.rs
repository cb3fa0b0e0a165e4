use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::Document;
use mongodb::{Client, Database};

use super::gateway::{DocumentStore, StoreError};

/// Production gateway over the official MongoDB driver.
///
/// The client connects lazily: constructing the store always succeeds and an
/// unreachable server surfaces on the first operation instead.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, database: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        Ok(Self {
            db: client.database(database),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn create(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;

        // ObjectIds render as 24-char hex; other id types fall back to their
        // BSON display form.
        let id = match result.inserted_id.as_object_id() {
            Some(object_id) => object_id.to_hex(),
            None => result.inserted_id.to_string(),
        };
        Ok(id)
    }

    async fn list(
        &self,
        collection: &str,
        filter: Document,
        limit: i64,
    ) -> Result<Vec<Document>, StoreError> {
        let mut cursor = self
            .db
            .collection::<Document>(collection)
            .find(filter)
            .limit(limit)
            .await?;

        let mut documents = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            documents.push(document);
        }
        Ok(documents)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db.list_collection_names().await?)
    }
}
