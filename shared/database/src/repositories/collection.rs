//! Collection Repository
//!
//! CRUD operations over a single MongoDB collection.

use anyhow::{Context, Result};
use futures::TryStreamExt;
use mongodb::{
    bson::{Bson, Document},
    results::UpdateResult,
    Collection, Database,
};
use serde::{de::DeserializeOwned, Serialize};

pub struct CollectionRepository<T>
where
    T: Send + Sync,
{
    collection: Collection<T>,
}

impl<T> Clone for CollectionRepository<T>
where
    T: Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
        }
    }
}

impl<T> CollectionRepository<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    /// The collection is created on the fly by the first write if it does not exist.
    pub fn new(database: &Database, collection_name: &str) -> Self {
        Self {
            collection: database.collection::<T>(collection_name),
        }
    }

    pub fn name(&self) -> &str {
        self.collection.name()
    }

    /// A schema-less handle onto the same underlying collection.
    pub fn untyped(&self) -> CollectionRepository<Document> {
        CollectionRepository {
            collection: self.collection.clone_with_type::<Document>(),
        }
    }

    /// Insert one document, returning its `_id`
    pub async fn insert_one(&self, document: &T) -> Result<Bson> {
        let result = self
            .collection
            .insert_one(document, None)
            .await
            .with_context(|| format!("Failed to insert document into {}", self.name()))?;

        tracing::debug!(collection = self.name(), id = %result.inserted_id, "Inserted document");
        Ok(result.inserted_id)
    }

    /// Insert a batch of documents, returning how many were inserted
    pub async fn insert_many(&self, documents: &[T]) -> Result<usize> {
        if documents.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection
            .insert_many(documents, None)
            .await
            .with_context(|| format!("Failed to insert documents into {}", self.name()))?;

        tracing::debug!(
            collection = self.name(),
            count = result.inserted_ids.len(),
            "Inserted documents"
        );
        Ok(result.inserted_ids.len())
    }

    /// Find the first document matching `filter`
    pub async fn find_one(&self, filter: Document) -> Result<Option<T>> {
        self.collection
            .find_one(filter, None)
            .await
            .with_context(|| format!("Failed to find document in {}", self.name()))
    }

    /// Find every document matching `filter`
    pub async fn find_many(&self, filter: Document) -> Result<Vec<T>> {
        let cursor = self
            .collection
            .find(filter, None)
            .await
            .with_context(|| format!("Failed to query {}", self.name()))?;

        cursor
            .try_collect::<Vec<T>>()
            .await
            .with_context(|| format!("Failed to read results from {}", self.name()))
    }

    pub async fn count(&self, filter: Document) -> Result<u64> {
        self.collection
            .count_documents(filter, None)
            .await
            .with_context(|| format!("Failed to count documents in {}", self.name()))
    }

    pub async fn count_all(&self) -> Result<u64> {
        self.count(Document::new()).await
    }

    pub async fn update_one(&self, filter: Document, update: Document) -> Result<UpdateResult> {
        let result = self
            .collection
            .update_one(filter, update, None)
            .await
            .with_context(|| format!("Failed to update document in {}", self.name()))?;

        tracing::debug!(
            collection = self.name(),
            matched = result.matched_count,
            modified = result.modified_count,
            "Updated document"
        );
        Ok(result)
    }

    pub async fn update_many(&self, filter: Document, update: Document) -> Result<UpdateResult> {
        let result = self
            .collection
            .update_many(filter, update, None)
            .await
            .with_context(|| format!("Failed to update documents in {}", self.name()))?;

        tracing::debug!(
            collection = self.name(),
            matched = result.matched_count,
            modified = result.modified_count,
            "Updated documents"
        );
        Ok(result)
    }

    /// Delete the first document matching `filter`, returning the deleted count
    pub async fn delete_one(&self, filter: Document) -> Result<u64> {
        let result = self
            .collection
            .delete_one(filter, None)
            .await
            .with_context(|| format!("Failed to delete document from {}", self.name()))?;

        Ok(result.deleted_count)
    }

    /// Delete every document matching `filter`, returning the deleted count
    pub async fn delete_many(&self, filter: Document) -> Result<u64> {
        let result = self
            .collection
            .delete_many(filter, None)
            .await
            .with_context(|| format!("Failed to delete documents from {}", self.name()))?;

        tracing::debug!(collection = self.name(), deleted = result.deleted_count, "Deleted documents");
        Ok(result.deleted_count)
    }
}
