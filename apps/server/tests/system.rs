//! Integration tests for the status/health endpoints and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{build_test_app, delete, get, insert, send_json, status_and_json};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_returns_static_document() {
    let (app, _db) = build_test_app().await;

    let (status, json) = status_and_json(get(app, "/health").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
    assert!(json["endpoints"].as_array().unwrap().len() >= 7);
    assert!(json["fields"]["name"].is_string());
}

#[tokio::test]
async fn status_reports_counts() {
    let (app, db) = build_test_app().await;
    insert(&db, "Milk", false).await;
    insert(&db, "Bread", true).await;
    insert(&db, "Eggs", false).await;

    let (status, json) = status_and_json(get(app, "/api/status").await).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["status"], "running");
    assert_eq!(json["data"]["total_products"], 3);
    assert_eq!(json["data"]["purchased_products"], 1);
    assert_eq!(json["data"]["not_purchased"], 2);
    assert!(json["data"]["timestamp"].is_string());
}

#[tokio::test]
async fn storage_failure_is_500_with_message() {
    let (app, db) = build_test_app().await;
    db.close().await;

    let (status, json) = status_and_json(get(app, "/api/products").await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert!(!json["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _db) = build_test_app().await;

    let (status, json) = status_and_json(get(app, "/this-route-does-not-exist").await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn non_integer_product_id_is_404_envelope() {
    let (app, _db) = build_test_app().await;

    for uri in ["/api/products/abc", "/api/products/99999999999999999999"] {
        let (status, json) = status_and_json(get(app.clone(), uri).await).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(json["success"], false);
        assert!(json["error"].is_string());
    }

    let (status, json) = status_and_json(delete(app, "/api/products/abc").await).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn unserved_method_is_405_envelope() {
    let (app, db) = build_test_app().await;
    let id = insert(&db, "Milk", false).await;

    let response = send_json(
        app.clone(),
        Method::PATCH,
        &format!("/api/products/{id}"),
        json!({ "purchased": true }),
    )
    .await;
    let (status, json) = status_and_json(response).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Method not allowed");

    let (status, json) = status_and_json(get(app, "/api/sync").await).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let (app, _db) = build_test_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/products")
        .header("Origin", "http://192.168.1.23:8081")
        .header("Access-Control-Request-Method", "PUT")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "*");
}
