//! HTTP handlers for the BasketRec REST API.
//!
//! - `recommend`: top-5 co-purchase recommendations for a product
//! - `health`: liveness probe with the catalog size
//! - `helpers`: shared error-response plumbing

pub mod health;
pub mod helpers;
pub mod recommend;

pub use health::health_check;
pub use recommend::recommend;
