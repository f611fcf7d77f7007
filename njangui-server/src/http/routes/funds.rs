//! Fund endpoints
//!
//! - `GET /funds`: all funds, newest first
//! - `POST /funds`: create a fund; `name` must be unique

use std::sync::Arc;

use axum::Router;

use super::resource;
use crate::http::server::AppState;
use crate::models::Fund;

/// Fund routes
pub fn router() -> Router<Arc<AppState>> {
    resource::router::<Fund>()
}
