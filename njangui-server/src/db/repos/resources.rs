//! Resource repository - list and create for any [`Resource`]
//!
//! - list: `find_all` newest first
//! - create: lookup by business key, then insert; a unique violation from
//!   the store is reported as [`RepoError::DuplicateKey`] as well

use std::marker::PhantomData;

use crate::db::store::{DocumentStore, Filter, SortOrder, StoreError};
use crate::models::{CreatePayload, Document, Fund, Member, Resource};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{label} with {field} '{value}' already exists")]
    DuplicateKey {
        label: &'static str,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Repository for one resource type
pub struct ResourceRepo<'a, R> {
    store: &'a dyn DocumentStore,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceRepo<'a, R> {
    pub fn new(store: &'a dyn DocumentStore) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }

    /// All documents, newest first.
    pub async fn list(&self) -> RepoResult<Vec<Document>> {
        let docs = self
            .store
            .find_all(R::COLLECTION, SortOrder::NewestFirst)
            .await?;
        tracing::debug!(collection = R::COLLECTION, count = docs.len(), "listed documents");
        Ok(docs)
    }

    /// Create a document unless its business key is taken.
    pub async fn create(&self, payload: CreatePayload) -> RepoResult<Document> {
        let filter = Filter::eq(R::KEY_FIELD, payload.key());

        if self.store.find_one(R::COLLECTION, &filter).await?.is_some() {
            return Err(self.duplicate(payload.key()));
        }

        let key = payload.key().to_owned();
        match self.store.insert(R::COLLECTION, payload.into_fields()).await {
            Ok(doc) => Ok(doc),
            // lost a race with a concurrent create
            Err(e) if e.is_unique_violation() => {
                tracing::debug!(collection = R::COLLECTION, key = %key, "unique violation on insert");
                Err(self.duplicate(&key))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn duplicate(&self, value: &str) -> RepoError {
        RepoError::DuplicateKey {
            label: R::LABEL,
            field: R::KEY_FIELD,
            value: value.to_owned(),
        }
    }
}

/// Declare the business-key unique constraint of every resource.
pub async fn ensure_indexes(store: &dyn DocumentStore) -> Result<(), StoreError> {
    store.ensure_unique(Fund::COLLECTION, Fund::KEY_FIELD).await?;
    store.ensure_unique(Member::COLLECTION, Member::KEY_FIELD).await?;
    tracing::info!(backend = store.backend(), "unique key constraints ensured");
    Ok(())
}
