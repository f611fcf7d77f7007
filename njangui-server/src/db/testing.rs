//! Store wrappers for exercising repository edge cases

use async_trait::async_trait;

use super::memory::MemoryStore;
use super::store::{DocumentStore, Filter, SortOrder, StoreResult};
use crate::models::{Document, Fields};

/// [`MemoryStore`] whose `find_one` never sees anything.
///
/// Every create skips the duplicate lookup and reaches `insert`, the same
/// path a request takes when it loses a race with a concurrent create.
#[derive(Debug, Default)]
pub struct LookupBlindStore(pub MemoryStore);

#[async_trait]
impl DocumentStore for LookupBlindStore {
    fn backend(&self) -> &'static str {
        "lookup-blind"
    }

    async fn ensure_unique(&self, collection: &str, field: &str) -> StoreResult<()> {
        self.0.ensure_unique(collection, field).await
    }

    async fn find_all(&self, collection: &str, sort: SortOrder) -> StoreResult<Vec<Document>> {
        self.0.find_all(collection, sort).await
    }

    async fn find_one(&self, _: &str, _: &Filter) -> StoreResult<Option<Document>> {
        Ok(None)
    }

    async fn insert(&self, collection: &str, fields: Fields) -> StoreResult<Document> {
        self.0.insert(collection, fields).await
    }

    async fn ping(&self) -> StoreResult<()> {
        self.0.ping().await
    }
}
