//! Process-local document store
//!
//! Backs `njangui serve --memory` and the test suite. Data is lost on exit.
//! Unique constraints are checked under the write lock, so concurrent
//! inserts of the same key cannot both succeed.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::{check_identifier, DocumentStore, Filter, SortOrder, StoreError, StoreResult};
use crate::models::{Document, Fields};

#[derive(Debug, Default)]
struct Collection {
    /// Insertion order; timestamps are non-decreasing along it
    docs: Vec<Document>,
    unique_fields: BTreeSet<String>,
}

impl Collection {
    fn violates_unique(&self, fields: &Fields) -> Option<&str> {
        self.unique_fields.iter().map(String::as_str).find(|field| {
            fields.get(*field).is_some_and(|value| {
                self.docs.iter().any(|doc| doc.get(field) == Some(value))
            })
        })
    }
}

/// In-memory [`DocumentStore`]
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, |c| c.docs.len())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ensure_unique(&self, collection: &str, field: &str) -> StoreResult<()> {
        let collection = check_identifier(collection)?;
        let field = check_identifier(field)?;

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_owned())
            .or_default()
            .unique_fields
            .insert(field.to_owned());
        Ok(())
    }

    async fn find_all(&self, collection: &str, sort: SortOrder) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let Some(coll) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        let docs = match sort {
            SortOrder::NewestFirst => coll.docs.iter().rev().cloned().collect(),
            SortOrder::OldestFirst => coll.docs.clone(),
        };
        Ok(docs)
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|c| c.docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    async fn insert(&self, collection: &str, fields: Fields) -> StoreResult<Document> {
        let mut collections = self.collections.write().await;
        let coll = collections.entry(collection.to_owned()).or_default();

        if let Some(field) = coll.violates_unique(&fields) {
            return Err(StoreError::UniqueViolation {
                collection: collection.to_owned(),
                constraint: Some(format!("{collection}.{field}")),
            });
        }

        // Clamp so a backwards clock step cannot reorder the collection.
        let now = Utc::now();
        let created_at = coll
            .docs
            .last()
            .map_or(now, |last| last.created_at.max(now));

        let doc = Document {
            id: Uuid::new_v4(),
            fields,
            created_at,
            updated_at: created_at,
        };
        coll.docs.push(doc.clone());
        Ok(doc)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
