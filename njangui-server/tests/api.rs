//! End-to-end router tests against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use njangui_server::db::ensure_indexes;
use njangui_server::models::{Document, Envelope};
use njangui_server::{build_router, AppState, DocumentStore, MemoryStore};

async fn app_with(store: Arc<MemoryStore>) -> Router {
    ensure_indexes(store.as_ref()).await.unwrap();
    build_router(AppState::new(store))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_raw(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, post_raw(uri, body.to_string())).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

#[tokio::test]
async fn fund_created_twice_is_rejected_second_time() {
    let app = app_with(Arc::new(MemoryStore::new())).await;

    let (status, body) = post(&app, "/funds", json!({"name": "Group A"})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "Group A");

    let (status, body) = post(&app, "/funds", json!({"name": "Group A"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[tokio::test]
async fn member_created_then_listed() {
    let app = app_with(Arc::new(MemoryStore::new())).await;

    post(&app, "/members", json!({"phoneNumber": "555-0100"})).await;
    let (status, body) = get(&app, "/members").await;

    assert_eq!(status, StatusCode::OK);
    let envelope: Envelope<Vec<Document>> = serde_json::from_value(body).unwrap();
    assert!(envelope.success);
    let members = envelope.data.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].get_str("phoneNumber"), Some("555-0100"));
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = app_with(Arc::new(MemoryStore::new())).await;
    for name in ["t1", "t2", "t3"] {
        let (status, _) = post(&app, "/api/funds", json!({ "name": name })).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = get(&app, "/api/funds").await;
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|fund| fund["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["t3", "t2", "t1"]);

    let envelope: Envelope<Vec<Document>> = serde_json::from_value(body.clone()).unwrap();
    let docs = envelope.data.unwrap();
    assert!(docs.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn created_document_carries_system_fields() {
    let app = app_with(Arc::new(MemoryStore::new())).await;
    let (_, body) = post(
        &app,
        "/funds",
        json!({"name": "Emergency", "_id": "client-chosen", "interestRate": 0.1}),
    )
    .await;

    let doc: Document = serde_json::from_value(body["data"].clone()).unwrap();
    assert_ne!(body["data"]["_id"], "client-chosen");
    assert_eq!(doc.get_str("name"), Some("Emergency"));
    assert_eq!(doc.get("interestRate"), Some(&json!(0.1)));
    assert_eq!(doc.created_at, doc.updated_at);
}

#[tokio::test]
async fn concurrent_creates_yield_one_document() {
    let store = Arc::new(MemoryStore::new());
    let app = app_with(store.clone()).await;

    let attempts = (0..16).map(|_| {
        let app = app.clone();
        tokio::spawn(async move { post(&app, "/members", json!({"phoneNumber": "555-0199"})).await })
    });

    let mut created = 0;
    let mut rejected = 0;
    for attempt in futures::future::join_all(attempts).await {
        let (status, body) = attempt.unwrap();
        if status == StatusCode::CREATED {
            created += 1;
        } else {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body["error"].as_str().unwrap().contains("already exists"));
            rejected += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(rejected, 15);
    assert_eq!(store.len("members").await, 1);
}

#[tokio::test]
async fn malformed_json_uses_failure_envelope() {
    let app = app_with(Arc::new(MemoryStore::new())).await;

    let (status, body) = send(&app, post_raw("/funds", "{\"name\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().starts_with("invalid JSON body"));

    let (status, body) = post(&app, "/funds", json!([{"name": "Group A"}])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "request body must be a JSON object");
}

#[tokio::test]
async fn health_reports_store_backend() {
    let store = Arc::new(MemoryStore::new());
    assert_eq!(store.backend(), "memory");

    let app = app_with(store).await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
}
