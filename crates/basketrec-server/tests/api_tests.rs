//! HTTP surface integration tests.
//!
//! The router is driven in-process with `tower::ServiceExt::oneshot`; the
//! trained network is replaced by a deterministic predictor so assertions
//! on ordering and error mapping are exact.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use basketrec_core::{Order, OrderItem, Predictor, ProductCatalog, RecommendContext};
use basketrec_server::{AppState, health_check, recommend};

/// Fixed probability table standing in for the trained network.
struct FixedPredictor {
    row: Vec<f32>,
}

impl Predictor for FixedPredictor {
    fn predict(&self, _input: &[f32]) -> basketrec_core::Result<Vec<f32>> {
        Ok(self.row.clone())
    }
}

/// Router over a three-product catalog and the given probability row.
fn test_app(row: Vec<f32>) -> Router {
    let items = (1..=3i64)
        .map(|id| OrderItem {
            product_id: Some(id),
            name: format!("product-{id}"),
            category: "test".to_string(),
        })
        .collect();
    let catalog = ProductCatalog::from_orders(&[Order { items }]);
    let ctx = RecommendContext::new(catalog, Box::new(FixedPredictor { row }));
    let state = Arc::new(AppState { ctx });

    Router::new()
        .route("/health", get(health_check))
        .route("/recommend/{product_id}", get(recommend))
        .with_state(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let json: Value = serde_json::from_slice(&body).expect("Invalid JSON");
    (status, json)
}

#[tokio::test]
async fn recommend_returns_products_ranked_by_probability() {
    let (status, json) = get_json(test_app(vec![0.1, 0.2, 0.7]), "/recommend/1").await;

    assert_eq!(status, StatusCode::OK);
    let recommendations = json["recommendations"].as_array().expect("array");
    assert_eq!(recommendations.len(), 3);
    assert_eq!(recommendations[0]["id"], 3);
    assert_eq!(recommendations[0]["name"], "product-3");
    assert_eq!(recommendations[0]["category"], "test");
    assert_eq!(recommendations[1]["id"], 2);
    assert_eq!(recommendations[2]["id"], 1);
}

#[tokio::test]
async fn unknown_product_maps_to_400() {
    let (status, json) = get_json(test_app(vec![0.3, 0.3, 0.4]), "/recommend/999").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Product not found");
}

#[tokio::test]
async fn backend_failure_maps_to_generic_500() {
    // A probability row of the wrong width is an inference failure; the
    // client sees only the fixed generic body.
    let (status, json) = get_json(test_app(vec![0.5]), "/recommend/1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Internal server error");
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let (status, json) = get_json(test_app(vec![0.3, 0.3, 0.4]), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["products"], 3);
}

#[tokio::test]
async fn non_numeric_product_id_is_rejected() {
    let app = test_app(vec![0.3, 0.3, 0.4]);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/recommend/not-a-number")
                .body(Body::empty())
                .expect("Failed to build request"),
        )
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
