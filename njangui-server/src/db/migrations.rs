//! Schema bootstrap for the document table
//!
//! Idempotent: safe to run on every startup.

use sqlx::PgPool;

/// Create the `documents` table and its ordering index.
///
/// Unique business-key indexes are declared separately through
/// [`DocumentStore::ensure_unique`](super::DocumentStore::ensure_unique).
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running document store migrations...");

    // seq breaks created_at ties so ordering matches insertion order
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            seq BIGSERIAL PRIMARY KEY,
            id UUID NOT NULL UNIQUE DEFAULT gen_random_uuid(),
            collection TEXT NOT NULL,
            doc JSONB NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT clock_timestamp()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS documents_collection_created_idx
        ON documents (collection, created_at DESC, seq DESC)
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Document store migrations complete");
    Ok(())
}
