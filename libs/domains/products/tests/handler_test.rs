//! Handler tests for the Products domain
//!
//! These drive the products router directly (no server, no middleware):
//! - request deserialization and validation
//! - response JSON shape
//! - status codes for domain failures

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

fn clean_code() -> Product {
    Product {
        id: "CLN-CDE-BOOK".to_string(),
        name: "Clean Code".to_string(),
        description: "Clean Code: A Handbook of Agile Software Craftsmanship (Robert C. Martin)"
            .to_string(),
        price: Price::new(Decimal::new(1899, 2), "GBP"),
        product_type: ProductType::Books,
        department: "Books and Stationery".to_string(),
        weight: "220g".to_string(),
    }
}

fn clean_code_json() -> Value {
    json!({
        "id": "CLN-CDE-BOOK",
        "name": "Clean Code",
        "description": "Clean Code: A Handbook of Agile Software Craftsmanship (Robert C. Martin)",
        "price": { "value": 18.99, "currency": "GBP" },
        "type": "Book",
        "department": "Books and Stationery",
        "weight": "220g"
    })
}

fn app_with(products: Vec<Product>) -> (Router, InMemoryProductRepository) {
    let repo = InMemoryProductRepository::with_products(products).unwrap();
    let service = ProductService::new(repo.clone());
    (handlers::router(service), repo)
}

fn app() -> (Router, InMemoryProductRepository) {
    app_with(vec![clean_code()])
}

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_list_products_returns_seeded_catalog() {
    let (app, _) = app();

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body, json!([clean_code_json()]));
    assert_eq!(body[0]["type"], "Book");
    assert_eq!(body[0]["price"]["value"], 18.99);
}

#[tokio::test]
async fn test_list_products_by_type_ignores_case() {
    let mut cable = clean_code();
    cable.id = "USB-C-CBL-2M".to_string();
    cable.product_type = ProductType::Electronics;
    let (app, _) = app_with(vec![clean_code(), cable]);

    let upper = app.clone().oneshot(get("/?byType=Book")).await.unwrap();
    assert_eq!(upper.status(), StatusCode::OK);
    let upper = json_body(upper.into_body()).await;

    let lower = app.oneshot(get("/?byType=book")).await.unwrap();
    let lower = json_body(lower.into_body()).await;

    assert_eq!(upper, lower);
    assert_eq!(upper.as_array().unwrap().len(), 1);
    assert_eq!(upper[0]["id"], "CLN-CDE-BOOK");
}

#[tokio::test]
async fn test_list_products_by_unknown_type_is_empty() {
    let (app, _) = app();

    let response = app.oneshot(get("/?byType=Furniture")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_empty_type_filter_lists_everything() {
    let (app, _) = app();

    let response = app.oneshot(get("/?byType=")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_whitespace_type_filter_matches_nothing() {
    let (app, _) = app();

    let response = app.oneshot(get("/?byType=%20%20")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_padded_type_filter_is_not_trimmed() {
    let (app, _) = app();

    let response = app.oneshot(get("/?byType=%20Book%20")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, json!([]));
}

#[tokio::test]
async fn test_create_product_returns_saved_product() {
    let (app, repo) = app_with(vec![]);

    let response = app.oneshot(post_json(&clean_code_json())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response.into_body()).await, clean_code_json());

    assert_eq!(repo.find_by_id("CLN-CDE-BOOK").await, Some(clean_code()));
}

#[tokio::test]
async fn test_create_duplicate_product_is_bad_request() {
    let (app, repo) = app();

    let response = app.oneshot(post_json(&clean_code_json())).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("already exists"));
    assert!(body["message"].as_str().unwrap().contains("CLN-CDE-BOOK"));
    assert!(body["timestamp"].is_string());
    assert_eq!(repo.count().await, 1);
}

#[tokio::test]
async fn test_create_with_negative_price_is_bad_request() {
    let (app, repo) = app_with(vec![]);
    let mut payload = clean_code_json();
    payload["price"]["value"] = json!(-1.5);

    let response = app.oneshot(post_json(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_create_with_malformed_body_is_client_error() {
    let (app, _) = app_with(vec![]);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"id\": \"X\""))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert!(response.status().is_client_error());

    let body = json_body(response.into_body()).await;
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_create_with_unknown_type_label_is_client_error() {
    let (app, _) = app_with(vec![]);
    let mut payload = clean_code_json();
    payload["type"] = json!("BOOKS");

    let response = app.oneshot(post_json(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_with_missing_field_is_unprocessable() {
    let (app, repo) = app_with(vec![]);
    let mut payload = clean_code_json();
    payload.as_object_mut().unwrap().remove("department");

    let response = app.oneshot(post_json(&payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "UNPROCESSABLE_ENTITY");
    assert_eq!(repo.count().await, 0);
}

#[tokio::test]
async fn test_get_product_by_id() {
    let (app, _) = app();

    let response = app.oneshot(get("/CLN-CDE-BOOK")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["id"], "CLN-CDE-BOOK");
}

#[tokio::test]
async fn test_get_unknown_product_is_bad_request() {
    let (app, _) = app();

    let response = app.oneshot(get("/UNKNOWN")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product with id UNKNOWN not found!");
}

#[tokio::test]
async fn test_delete_product_confirms_and_removes() {
    let (app, repo) = app();

    let response = app.oneshot(delete("/CLN-CDE-BOOK")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Product with id CLN-CDE-BOOK has been deleted!");
    assert!(repo.find_by_id("CLN-CDE-BOOK").await.is_none());
}

#[tokio::test]
async fn test_delete_unknown_product_is_bad_request() {
    let (app, repo) = app();

    let response = app.oneshot(delete("/UNKNOWN")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response.into_body()).await;
    assert!(body["message"].as_str().unwrap().contains("not found"));
    assert_eq!(repo.count().await, 1);
}
