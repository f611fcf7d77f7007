//! Member endpoints
//!
//! - `GET /members`: all members, newest first
//! - `POST /members`: create a member; `phoneNumber` must be unique

use std::sync::Arc;

use axum::Router;

use super::resource;
use crate::http::server::AppState;
use crate::models::Member;

/// Member routes
pub fn router() -> Router<Arc<AppState>> {
    resource::router::<Member>()
}
