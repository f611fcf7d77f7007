//! Postgres-backed document store
//!
//! Every collection lives in the single `documents` table as JSONB.
//! Business keys are enforced with partial unique expression indexes, e.g.
//! `ON documents ((doc ->> 'name')) WHERE collection = 'funds'`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::migrations;
use super::pool::{create_pool, PoolOptions};
use super::store::{check_identifier, DocumentStore, Filter, SortOrder, StoreError, StoreResult};
use crate::models::{Document, Fields};

/// Row shape shared by every SELECT/RETURNING below
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: Uuid,
    doc: Json<Fields>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DocumentRow> for Document {
    fn from(row: DocumentRow) -> Self {
        Self {
            id: row.id,
            fields: row.doc.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Document store over a Postgres pool
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Wrap a pool whose schema is already migrated.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect, run migrations, and return a ready store.
    pub async fn connect(database_url: &str, options: PoolOptions) -> StoreResult<Self> {
        let pool = create_pool(database_url, options).await?;
        migrations::run(&pool).await?;
        Ok(Self::new(pool))
    }
}

fn map_insert_error(collection: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::UniqueViolation {
            collection: collection.to_owned(),
            constraint: db.constraint().map(str::to_owned),
        },
        other => StoreError::Sqlx(other),
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn ensure_unique(&self, collection: &str, field: &str) -> StoreResult<()> {
        let collection = check_identifier(collection)?;
        let field = check_identifier(field)?;
        let index = format!("documents_{}_{}_key", collection, field.to_lowercase());

        // Identifiers are checked above; DDL cannot take bind parameters.
        let sql = format!(
            "CREATE UNIQUE INDEX IF NOT EXISTS {index} \
             ON documents ((doc ->> '{field}')) \
             WHERE collection = '{collection}'"
        );
        sqlx::query(&sql).execute(&self.pool).await?;

        tracing::debug!(collection, field, index = %index, "unique index ensured");
        Ok(())
    }

    async fn find_all(&self, collection: &str, sort: SortOrder) -> StoreResult<Vec<Document>> {
        let order = match sort {
            SortOrder::NewestFirst => "created_at DESC, seq DESC",
            SortOrder::OldestFirst => "created_at ASC, seq ASC",
        };
        let sql = format!(
            "SELECT id, doc, created_at, updated_at FROM documents \
             WHERE collection = $1 ORDER BY {order}"
        );

        let rows: Vec<DocumentRow> = sqlx::query_as(&sql)
            .bind(collection)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Document::from).collect())
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> StoreResult<Option<Document>> {
        let row: Option<DocumentRow> = sqlx::query_as(
            r#"
            SELECT id, doc, created_at, updated_at
            FROM documents
            WHERE collection = $1 AND doc -> $2 = $3
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(collection)
        .bind(&filter.field)
        .bind(Json(&filter.value))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Document::from))
    }

    async fn insert(&self, collection: &str, fields: Fields) -> StoreResult<Document> {
        let row: DocumentRow = sqlx::query_as(
            r#"
            INSERT INTO documents (collection, doc)
            VALUES ($1, $2)
            RETURNING id, doc, created_at, updated_at
            "#,
        )
        .bind(collection)
        .bind(Json(&fields))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_insert_error(collection, e))?;

        Ok(row.into())
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("Closing postgres pool");
        self.pool.close().await;
    }
}
