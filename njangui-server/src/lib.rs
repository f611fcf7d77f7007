//! njangui-server: HTTP API for Njangui Tracker
//!
//! Tracks the funds and members of a njangui (rotating savings and
//! lending group). Each resource supports list and create; creates are
//! rejected when the business key (`name` for funds, `phoneNumber` for
//! members) is already taken.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, NjanguiConfig};
pub use db::{DocumentStore, MemoryStore, PgDocumentStore};
pub use http::{build_router, run_server, AppState, ServerConfig};
