//! Recommendation handler.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use basketrec_core::Error;

use crate::AppState;
use crate::types::{ErrorResponse, RecommendationResponse, RecommendedProduct};

use super::helpers::internal_error;

/// Top co-purchase recommendations for a product.
#[utoipa::path(
    get,
    path = "/recommend/{product_id}",
    tag = "recommend",
    params(
        ("product_id" = i64, Path, description = "External product identifier")
    ),
    responses(
        (status = 200, description = "Ranked recommendations", body = RecommendationResponse),
        (status = 400, description = "Product not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<i64>,
) -> impl IntoResponse {
    // Forward pass and ranking are CPU-bound; keep them off the async
    // worker threads.
    let result = tokio::task::spawn_blocking(move || state.ctx.recommend(product_id)).await;

    match result {
        Ok(Ok(products)) => Json(RecommendationResponse {
            recommendations: products.into_iter().map(RecommendedProduct::from).collect(),
        })
        .into_response(),
        Ok(Err(Error::ProductNotFound(_))) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Product not found".to_string(),
            }),
        )
            .into_response(),
        Ok(Err(err)) => internal_error("recommend", &err).into_response(),
        Err(err) => internal_error("recommend", &err).into_response(),
    }
}
