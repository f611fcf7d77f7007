//! API error types with IntoResponse
//!
//! Errors are converted to `{ success: false, error }` envelopes. Store
//! failures are logged with a reference id; the client gets the id and a
//! generic message, never the underlying error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::db::repos::RepoError;
use crate::db::store::StoreError;
use crate::models::{Envelope, ValidationError};

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Payload failed validation (400)
    Validation(ValidationError),

    /// Business key already taken (400), carrying the repository message
    DuplicateKey(String),

    /// Store error (500, logged)
    Persistence(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::DuplicateKey(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Validation(e) => e.to_string(),
            Self::DuplicateKey(message) => message,
            Self::Persistence(e) => {
                // Log the actual error, return generic message
                let reference = Uuid::new_v4();
                tracing::error!(%reference, error = %e, "persistence failure");
                format!("an internal error occurred (reference: {})", reference)
            }
        };

        (status, Json(Envelope::failure(message))).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Persistence(e)
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            e @ RepoError::DuplicateKey { .. } => Self::DuplicateKey(e.to_string()),
            RepoError::Store(e) => Self::Persistence(e),
        }
    }
}
