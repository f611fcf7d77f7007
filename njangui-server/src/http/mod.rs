//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost front end only by default)
//! - Request tracing
//! - Graceful shutdown that closes the store
//! - JSON envelope error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
