//! Handler tests for the Products domain
//!
//! These tests verify that the HTTP layer works correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They run against the in-memory repository and image store, so only the
//! products domain handlers are exercised - no containers, no network.

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()
use uuid::Uuid;

fn test_app() -> (Router, InMemoryImageStore) {
    let repository = InMemoryProductRepository::new();
    let images = InMemoryImageStore::new();
    let service = ProductService::new(repository, images.clone());
    (handlers::router(service), images)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn chair_json() -> serde_json::Value {
    json!({
        "name": "Chair",
        "description": "A wooden chair",
        "price": 49.99,
        "stock_level": 10
    })
}

async fn create_chair(app: &Router) -> Uuid {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&chair_json()).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_product_returns_201_with_generated_id() {
    let (app, _) = test_app();

    let id = create_chair(&app).await;
    let second_id = create_chair(&app).await;

    // Every create hands out a fresh identifier
    assert_ne!(id, second_id);
}

#[tokio::test]
async fn test_create_then_get_returns_matching_product() {
    let (app, _) = test_app();
    let id = create_chair(&app).await;

    let request = Request::builder()
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.id, id);
    assert_eq!(product.name, "Chair");
    assert_eq!(product.description, "A wooden chair");
    assert_eq!(product.price, 49.99);
    assert_eq!(product.stock_level, 10);
    assert!(!product.is_published, "published flag defaults to false");
    assert_eq!(product.image_url, None);
}

#[tokio::test]
async fn test_create_product_validates_input() {
    let (app, _) = test_app();

    for invalid in [
        json!({"name": "C", "description": "A wooden chair", "price": 49.99, "stock_level": 10}),
        json!({"name": "Chair", "description": "tiny", "price": 49.99, "stock_level": 10}),
        json!({"name": "Chair", "description": "A wooden chair", "price": 0.05, "stock_level": 10}),
        json!({"name": "Chair", "description": "A wooden chair", "price": 49.99, "stock_level": 0}),
    ] {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&invalid).unwrap()))
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_list_on_empty_store_returns_empty_array() {
    let (app, _) = test_app();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_get_missing_product_returns_404() {
    let (app, _) = test_app();

    let request = Request::builder()
        .uri(format!("/{}", Uuid::now_v7()))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_with_malformed_uuid_returns_400() {
    let (app, _) = test_app();

    let request = Request::builder()
        .uri("/not-a-uuid")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_price_changes_only_price() {
    let (app, _) = test_app();
    let id = create_chair(&app).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"price": 59.99})).unwrap(),
        ))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let product: Product =
        json_body(app.oneshot(request).await.unwrap().into_body()).await;

    assert_eq!(product.price, 59.99);
    assert_eq!(product.name, "Chair");
    assert_eq!(product.description, "A wooden chair");
    assert_eq!(product.stock_level, 10);
}

#[tokio::test]
async fn test_update_with_empty_body_changes_nothing() {
    let (app, _) = test_app();
    let id = create_chair(&app).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", id))
        .header("content-type", "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let product: Product =
        json_body(app.oneshot(request).await.unwrap().into_body()).await;

    assert_eq!(product.name, "Chair");
    assert_eq!(product.price, 49.99);
    assert_eq!(product.stock_level, 10);
    assert!(!product.is_published);
}

#[tokio::test]
async fn test_update_rejects_out_of_bounds_values() {
    let (app, _) = test_app();
    let id = create_chair(&app).await;

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", id))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"price": 0.01})).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let (app, _) = test_app();

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/{}", Uuid::now_v7()))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({"price": 59.99})).unwrap(),
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product_then_get_returns_404() {
    let (app, _) = test_app();
    let id = create_chair(&app).await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Repeated delete reports NOT_FOUND
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_upload_image_stores_bytes_and_persists_url() {
    let (app, images) = test_app();
    let id = create_chair(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/image", id))
        .header("content-type", "image/png")
        .body(Body::from("png bytes"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: ProductImageResponse = json_body(response.into_body()).await;
    assert_eq!(body.image_url, format!("memory://products/{}", id));

    // The bytes landed in the store under the product's key
    assert_eq!(
        images.get(&format!("products/{}", id)).await,
        Some(Bytes::from_static(b"png bytes"))
    );

    // ...and the URL is persisted on the product
    let request = Request::builder()
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let product: Product =
        json_body(app.oneshot(request).await.unwrap().into_body()).await;
    assert_eq!(product.image_url, Some(body.image_url));
}

#[tokio::test]
async fn test_delete_image_clears_reference() {
    let (app, images) = test_app();
    let id = create_chair(&app).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/image", id))
        .header("content-type", "image/png")
        .body(Body::from("png bytes"))
        .unwrap();
    app.clone().oneshot(request).await.unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}/image", id))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert!(images.is_empty().await);

    let request = Request::builder()
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let product: Product =
        json_body(app.oneshot(request).await.unwrap().into_body()).await;
    assert_eq!(product.image_url, None);
}

#[tokio::test]
async fn test_upload_image_for_missing_product_returns_404() {
    let (app, images) = test_app();

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}/image", Uuid::now_v7()))
        .header("content-type", "image/png")
        .body(Body::from("png bytes"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(images.is_empty().await, "no object may be stored");
}
