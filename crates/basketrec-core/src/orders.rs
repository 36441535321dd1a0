//! Order history ingestion.
//!
//! The input is a JSON array of orders, each carrying an `items` array of
//! purchased products. Fields beyond the ones modelled here are ignored, and
//! no schema validation happens beyond what deserialization itself enforces.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One historical order. Only the item list is retained; orders are dropped
/// once training pairs have been generated from them.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    /// Products purchased together in this order.
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// One line item within an order.
///
/// `product_id` is the stable external identifier. Items without an id are
/// skipped during indexing. `name` and `category` default to empty strings
/// since minimal datasets omit them.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItem {
    /// Stable external product identifier; `None` when absent or null.
    #[serde(default)]
    pub product_id: Option<i64>,
    /// Display name, empty when the dataset omits it.
    #[serde(default)]
    pub name: String,
    /// Category label, empty when the dataset omits it.
    #[serde(default)]
    pub category: String,
}

/// Reads and parses the order history from `path`.
///
/// # Errors
///
/// Returns [`Error::DataLoad`] when the file is missing, unreadable, or not
/// a valid JSON array of orders.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| Error::DataLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&raw).map_err(|e| Error::DataLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
