//! Product catalog: dense slot assignment for one-hot encoding.
//!
//! Every distinct product id seen in the order history is assigned a dense
//! zero-based slot, in first-seen order. The catalog also keeps the inverse
//! mapping from slot back to product metadata so ranked slots can be turned
//! into response payloads.

use std::collections::HashMap;

use serde::Serialize;

use crate::orders::Order;

/// Product metadata as recorded at its first occurrence in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Stable external product identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: String,
}

/// Bidirectional mapping between external product ids and dense slots.
///
/// Invariants:
/// - every indexed product id maps to exactly one slot in `[0, num_products)`
/// - slots are assigned sequentially in first-seen order, so the catalog is
///   deterministic for a fixed input order
/// - metadata comes from the first occurrence; later occurrences of the same
///   id never overwrite it
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    slots: HashMap<i64, usize>,
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Builds the catalog from the full order history.
    ///
    /// Items without a product id are skipped. Orders with no items
    /// contribute nothing. There are no error paths.
    #[must_use]
    pub fn from_orders(orders: &[Order]) -> Self {
        let mut catalog = Self::default();
        for order in orders {
            for item in &order.items {
                let Some(id) = item.product_id else { continue };
                if catalog.slots.contains_key(&id) {
                    continue;
                }
                catalog.slots.insert(id, catalog.products.len());
                catalog.products.push(Product {
                    id,
                    name: item.name.clone(),
                    category: item.category.clone(),
                });
            }
        }
        catalog
    }

    /// Dense slot for an external product id, if the product was indexed.
    #[must_use]
    pub fn slot_of(&self, product_id: i64) -> Option<usize> {
        self.slots.get(&product_id).copied()
    }

    /// Product metadata for a slot, if the slot is in range.
    #[must_use]
    pub fn product_at(&self, slot: usize) -> Option<&Product> {
        self.products.get(slot)
    }

    /// Number of distinct products seen in the history. This is the width of
    /// every one-hot vector derived from the catalog.
    #[must_use]
    pub fn num_products(&self) -> usize {
        self.products.len()
    }

    /// True when no products were indexed at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
