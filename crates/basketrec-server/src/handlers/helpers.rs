//! Shared handler helpers for the BasketRec REST API.

use axum::{http::StatusCode, Json};

use crate::types::ErrorResponse;

/// Build an internal server error response without leaking implementation
/// details.
///
/// Logs the full error server-side via `tracing::error!` and returns the
/// fixed generic body the API contract promises. This prevents exposing
/// backend failures, task join errors, or internal state to API consumers.
pub fn internal_error(
    context: &str,
    err: &dyn std::fmt::Display,
) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!(%context, error = %err, "internal server error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Internal server error".to_string(),
        }),
    )
}
