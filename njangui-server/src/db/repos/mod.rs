//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Lists in a single query, newest first
//! - Duplicate keys come from the store's unique constraint, with a
//!   lookup beforehand only to skip a doomed write

pub mod resources;

pub use resources::{ensure_indexes, RepoError, RepoResult, ResourceRepo};
