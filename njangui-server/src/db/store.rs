//! Document store contract
//!
//! Both resource endpoints talk to storage only through [`DocumentStore`].
//! Implementations: [`PgDocumentStore`](super::PgDocumentStore) for
//! production, [`MemoryStore`](super::MemoryStore) for development and tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::models::{Document, Fields};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("unique constraint violated in '{collection}'")]
    UniqueViolation {
        collection: String,
        constraint: Option<String>,
    },

    #[error("invalid identifier '{0}'")]
    InvalidIdentifier(String),
}

impl StoreError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::UniqueViolation { .. })
    }
}

/// Ordering for [`DocumentStore::find_all`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// `createdAt` descending, later inserts first on ties
    #[default]
    NewestFirst,
    /// `createdAt` ascending
    OldestFirst,
}

/// Equality filter on a single top-level field
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Does `doc` satisfy this filter?
    pub fn matches(&self, doc: &Document) -> bool {
        doc.get(&self.field) == Some(&self.value)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Short backend name for health and logs.
    fn backend(&self) -> &'static str;

    /// Declare `field` unique within `collection`. Idempotent.
    ///
    /// After this returns, [`insert`](Self::insert) fails with
    /// [`StoreError::UniqueViolation`] for a repeated value.
    async fn ensure_unique(&self, collection: &str, field: &str) -> StoreResult<()>;

    /// Every document in `collection`, in `sort` order.
    async fn find_all(&self, collection: &str, sort: SortOrder) -> StoreResult<Vec<Document>>;

    /// First document matching `filter`, if any.
    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>>;

    /// Insert `fields` as a new document, assigning id and timestamps.
    async fn insert(&self, collection: &str, fields: Fields) -> StoreResult<Document>;

    /// Cheap liveness check.
    async fn ping(&self) -> StoreResult<()>;

    /// Release underlying resources. Called once at shutdown.
    async fn close(&self) {}
}

/// Identifiers interpolated into DDL must be plain `[A-Za-z_][A-Za-z0-9_]*`.
pub(crate) fn check_identifier(ident: &str) -> StoreResult<&str> {
    let mut chars = ident.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    if valid {
        Ok(ident)
    } else {
        Err(StoreError::InvalidIdentifier(ident.to_owned()))
    }
}
