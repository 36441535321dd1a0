//! Request/response types for the BasketRec REST API.

use basketrec_core::Product;
use serde::Serialize;
use utoipa::ToSchema;

/// One recommended product in a response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendedProduct {
    /// Stable external product identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
}

impl From<Product> for RecommendedProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
        }
    }
}

/// Successful response for `GET /recommend/{product_id}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecommendationResponse {
    /// Up to five products, ordered by descending predicted probability.
    pub recommendations: Vec<RecommendedProduct>,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` once the service is listening.
    pub status: String,
    /// Number of products the model was trained over.
    pub products: usize,
}

/// Error payload shared by all non-2xx responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
