//! Surface-level tests for the catalog API router.
//!
//! These drive the real router through tower without a live document store;
//! they cover the liveness probe, routing, and the request paths that are
//! answered before any store call is made.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

mod common;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn liveness_probe_answers() {
    let router = common::test_router().await;

    let response = router
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"TechTonic catalog API is running");
}

#[tokio::test]
async fn malformed_product_id_is_rejected_up_front() {
    let router = common::test_router().await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/products/not-a-hex-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid identifier: not-a-hex-id");
}

#[tokio::test]
async fn malformed_user_delete_id_is_rejected_up_front() {
    let router = common::test_router().await;

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/users/zzz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid identifier: zzz");
}

#[tokio::test]
async fn malformed_product_update_id_is_rejected_before_any_write() {
    let router = common::test_router().await;

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::PATCH)
                .uri("/products/xyz")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"name": "Pixelon X2", "price": 649.0}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid identifier: xyz");
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let router = common::test_router().await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/orders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn categories_are_read_only() {
    let router = common::test_router().await;

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
