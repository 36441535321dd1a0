//! BasketRec REST server library.
//!
//! Exposes the request handlers, shared state, and OpenAPI description used
//! by the `basketrec-server` binary and its integration tests. All routing
//! and transport concerns live here; recommendation logic stays in
//! `basketrec-core`.

use basketrec_core::RecommendContext;
use utoipa::OpenApi;

pub mod handlers;
pub mod types;

pub use handlers::{health_check, recommend};

/// Shared application state: the immutable recommendation context.
///
/// Constructed once after training completes and handed to axum behind an
/// `Arc`. Handlers only read it, so no locking is involved.
pub struct AppState {
    /// Catalog plus trained model, built by the startup pipeline.
    pub ctx: RecommendContext,
}

/// OpenAPI documentation for the BasketRec API.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::recommend::recommend, handlers::health::health_check),
    components(schemas(
        types::RecommendationResponse,
        types::RecommendedProduct,
        types::HealthResponse,
        types::ErrorResponse
    )),
    tags(
        (name = "recommend", description = "Co-purchase recommendations"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;
