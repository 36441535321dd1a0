//! Error taxonomy for the recommendation engine.
//!
//! Startup-stage errors (`DataLoad`, `ShapeMismatch`, `Training`) are fatal:
//! the service must never reach a listening state with an untrained or
//! inconsistent model. `ProductNotFound` and `Inference` occur per request
//! and are translated to HTTP responses at the server boundary.

use std::path::PathBuf;
use thiserror::Error;

/// All failure modes of the recommendation engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The order history file is missing, unreadable, or not valid JSON.
    #[error("failed to load orders from {path}: {reason}")]
    DataLoad {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O or parse failure.
        reason: String,
    },

    /// A generated training vector does not have the expected width.
    ///
    /// This guards against a bug in pair generation, not against user input.
    #[error("training vector width mismatch: expected {expected}, found lengths {found:?}")]
    ShapeMismatch {
        /// Expected vector width (the number of indexed products).
        expected: usize,
        /// Lengths of every offending vector, in generation order.
        found: Vec<usize>,
    },

    /// The neural network backend failed while fitting the model.
    #[error("model training failed: {0}")]
    Training(String),

    /// The requested product id was never seen in the order history.
    #[error("product {0} not found")]
    ProductNotFound(i64),

    /// The neural network backend failed while scoring a request.
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
