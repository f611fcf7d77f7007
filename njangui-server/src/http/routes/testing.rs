//! Router test helpers

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use crate::db::store::{DocumentStore, Filter, SortOrder, StoreError, StoreResult};
use crate::http::server::{build_router, AppState};
use crate::models::{Document, Fields};

/// Store whose every operation fails like an exhausted pool
pub struct FailingStore;

fn refused<T>() -> StoreResult<T> {
    Err(StoreError::Sqlx(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn ensure_unique(&self, _: &str, _: &str) -> StoreResult<()> {
        refused()
    }

    async fn find_all(&self, _: &str, _: SortOrder) -> StoreResult<Vec<Document>> {
        refused()
    }

    async fn find_one(&self, _: &str, _: &Filter) -> StoreResult<Option<Document>> {
        refused()
    }

    async fn insert(&self, _: &str, _: Fields) -> StoreResult<Document> {
        refused()
    }

    async fn ping(&self) -> StoreResult<()> {
        refused()
    }
}

pub fn app(store: Arc<dyn DocumentStore>) -> Router {
    build_router(AppState::new(store))
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
