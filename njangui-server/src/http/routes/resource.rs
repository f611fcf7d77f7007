//! Generic list/create handlers shared by every [`Resource`]

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::ResourceRepo;
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CreatePayload, Document, Envelope, Resource};

/// GET /{collection} - every document, newest first
async fn list<R: Resource>(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Envelope<Vec<Document>>>, ApiError> {
    let docs = ResourceRepo::<R>::new(state.store.as_ref()).list().await?;
    Ok(Json(Envelope::ok(docs)))
}

/// POST /{collection} - create unless the business key is taken
async fn create<R: Resource>(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Envelope<Document>>), ApiError> {
    let payload = CreatePayload::parse::<R>(body)?;
    let doc = ResourceRepo::<R>::new(state.store.as_ref())
        .create(payload)
        .await?;

    tracing::info!(collection = R::COLLECTION, id = %doc.id, "{} created", R::LABEL);
    Ok((StatusCode::CREATED, Json(Envelope::ok(doc))))
}

/// `GET` + `POST` on `/{R::COLLECTION}`
pub fn router<R: Resource>() -> Router<Arc<AppState>> {
    let path = format!("/{}", R::COLLECTION);
    Router::new().route(&path, get(list::<R>).post(create::<R>))
}
