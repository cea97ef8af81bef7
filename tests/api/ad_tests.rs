//! Ad API Tests
//!
//! Transport-level tests for the validation paths of the ad endpoints.
//! All requests here are rejected before the store is touched, so they run
//! without a database.

use axum::http::StatusCode;

use crate::common::{body_json, TestApp};

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Wireless Mouse",
        "description": "2.4 GHz wireless optical mouse with USB receiver",
        "price": 500.00,
        "photos": [{"url": "http://example.com/1.jpg"}]
    })
}

#[tokio::test]
async fn list_rejects_zero_page() {
    let app = TestApp::new();

    let response = app.get("/ad/?page=0").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_rejects_negative_page() {
    let app = TestApp::new();

    let response = app.get("/ad/?page=-1").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn list_rejects_unknown_sort_direction() {
    let app = TestApp::new();

    let response = app.get("/ad/?price_order=upward").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_rejects_unknown_extra_field() {
    let app = TestApp::new();

    let response = app.get("/ad/1?fields=comments").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_rejects_short_name() {
    let app = TestApp::new();

    let mut body = valid_body();
    body["name"] = serde_json::json!("Mou");
    let response = app.post_json("/ad/", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert!(json["detail"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn create_rejects_short_description() {
    let app = TestApp::new();

    let mut body = valid_body();
    body["description"] = serde_json::json!("too short");
    let response = app.post_json("/ad/", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_rejects_price_below_minimum() {
    let app = TestApp::new();

    let mut body = valid_body();
    body["price"] = serde_json::json!(0.99);
    let response = app.post_json("/ad/", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_rejects_empty_photo_list() {
    let app = TestApp::new();

    let mut body = valid_body();
    body["photos"] = serde_json::json!([]);
    let response = app.post_json("/ad/", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_rejects_four_photos() {
    let app = TestApp::new();

    let mut body = valid_body();
    body["photos"] = serde_json::json!([
        {"url": "http://example.com/1.jpg"},
        {"url": "http://example.com/2.jpg"},
        {"url": "http://example.com/3.jpg"},
        {"url": "http://example.com/4.jpg"}
    ]);
    let response = app.post_json("/ad/", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn create_rejects_malformed_photo_url() {
    let app = TestApp::new();

    let mut body = valid_body();
    body["photos"] = serde_json::json!([{"url": "not a url"}]);
    let response = app.post_json("/ad/", &body.to_string()).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
