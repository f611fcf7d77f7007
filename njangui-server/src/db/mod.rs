//! Persistence layer - connection pool, document stores and repositories
//!
//! # Design Principles
//!
//! - One explicit connection pool, created at startup and closed on shutdown
//! - Stores are reached through the [`DocumentStore`] trait, never globals
//! - Rely on store-level unique constraints, map violations to duplicates

pub mod pool;
pub mod migrations;
pub mod store;
pub mod postgres;
pub mod memory;
pub mod repos;

#[cfg(test)]
pub(crate) mod testing;

pub use pool::{create_pool, PoolOptions};
pub use store::{DocumentStore, Filter, SortOrder, StoreError, StoreResult};
pub use postgres::PgDocumentStore;
pub use memory::MemoryStore;
pub use repos::*;
