//! # BasketRec Core
//!
//! Co-purchase recommendation engine: turns historical order data into a
//! trained feed-forward ranker and answers "customers who bought this also
//! bought" queries.
//!
//! The pipeline runs once at startup:
//!
//! 1. **Load** a JSON order history ([`load_orders`])
//! 2. **Index** every distinct product into a dense slot ([`ProductCatalog`])
//! 3. **Generate** one-hot co-purchase training pairs ([`TrainingSet`])
//! 4. **Verify** vector shapes before training ([`TrainingSet::verify_consistency`])
//! 5. **Fit** a two-layer dense network ([`CopurchaseNet::fit`])
//!
//! The result is an immutable [`RecommendContext`] that scores and ranks
//! products per request with no shared mutable state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use basketrec_core::RecommendContext;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = RecommendContext::bootstrap("data/orders.json")?;
//!     for product in ctx.recommend(2)? {
//!         println!("{} ({})", product.name, product.category);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod orders;
pub mod service;
pub mod training;

pub use catalog::{Product, ProductCatalog};
pub use error::{Error, Result};
pub use model::{CopurchaseNet, Predictor, TrainConfig};
pub use orders::{load_orders, Order, OrderItem};
pub use service::{RecommendContext, TOP_K};
pub use training::{one_hot, TrainingSet};
