#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use shoplist_core::NewProduct;
use shoplist_db::{Database, DbConfig};
use shoplist_server::{build_router, AppState};

/// Build the production router over a fresh in-memory database.
///
/// The `Database` handle is returned too so tests can check the store
/// directly.
pub async fn build_test_app() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database");

    let app = build_router(AppState::new(db.clone()));
    (app, db)
}

/// Insert a product straight into the store, bypassing HTTP.
pub async fn insert(db: &Database, name: &str, purchased: bool) -> i64 {
    db.products()
        .insert(&NewProduct {
            name: name.to_string(),
            purchased,
            notes: String::new(),
        })
        .await
        .expect("insert product")
        .id
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Send `body` as-is with a JSON content type.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    send_raw(app, method, uri, &body.to_string()).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Status and parsed body in one go.
pub async fn status_and_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    (status, body_json(response).await)
}
