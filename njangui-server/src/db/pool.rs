//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is owned by
//! [`PgDocumentStore`](super::PgDocumentStore) and closed on shutdown.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Kept low for a small internal tool.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free connection.
pub const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool sizing options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

/// Create a PostgreSQL connection pool.
///
/// Connects eagerly so an unreachable database fails at startup rather
/// than on the first request.
///
/// # Errors
///
/// Returns an error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool("postgres://localhost/njangui", PoolOptions::default()).await?;
/// ```
pub async fn create_pool(
    database_url: &str,
    options: PoolOptions,
) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        max_connections = options.max_connections,
        acquire_timeout_ms = options.acquire_timeout.as_millis() as u64,
        "connecting to postgres"
    );

    PgPoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(options.acquire_timeout)
        .connect(database_url)
        .await
}
