//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON request body whose rejections use the failure envelope.
///
/// Plain `Json` answers malformed bodies with a text/plain 4xx; this keeps
/// every response on `{ success, error }`.
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::MalformedJson {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}
