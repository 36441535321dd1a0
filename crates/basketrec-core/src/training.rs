//! Co-purchase training-pair generation and pre-training shape checks.
//!
//! Every order is expanded into all ordered pairs of distinct product slots
//! it contains: products bought together predict each other, in both
//! directions. Each pair becomes one training example of parallel one-hot
//! vectors. Expansion is O(orders × items²), which is fine at the intended
//! dataset scale but blows up quadratically for orders with many items.

use crate::catalog::ProductCatalog;
use crate::error::{Error, Result};
use crate::orders::Order;

/// A one-hot row of width `width` with `hot` set to 1.
#[must_use]
pub fn one_hot(width: usize, hot: usize) -> Vec<f32> {
    let mut row = vec![0.0; width];
    row[hot] = 1.0;
    row
}

/// Parallel sequences of one-hot input and target vectors, paired by
/// position. Inputs and targets always have the same length.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    inputs: Vec<Vec<f32>>,
    targets: Vec<Vec<f32>>,
}

impl TrainingSet {
    /// Expands the order history into co-purchase training pairs.
    ///
    /// For each order, items are mapped to catalog slots (items that were
    /// never indexed are dropped) and every ordered pair of distinct slots
    /// emits one example: input one-hot at the first slot, target one-hot at
    /// the second. An order with duplicate items emits duplicate pairs, so
    /// repeated items carry proportionally more training weight.
    #[must_use]
    pub fn from_orders(orders: &[Order], catalog: &ProductCatalog) -> Self {
        let width = catalog.num_products();
        let mut set = Self::default();

        for order in orders {
            let slots: Vec<usize> = order
                .items
                .iter()
                .filter_map(|item| item.product_id)
                .filter_map(|id| catalog.slot_of(id))
                .collect();

            for &slot in &slots {
                for &other in &slots {
                    if slot == other {
                        continue;
                    }
                    set.inputs.push(one_hot(width, slot));
                    set.targets.push(one_hot(width, other));
                }
            }
        }

        set
    }

    /// Confirms every generated vector has width `expected`.
    ///
    /// This is a programmer-invariant check on the generator, run once
    /// before training.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] listing the offending lengths when
    /// any input or target vector deviates.
    pub fn verify_consistency(&self, expected: usize) -> Result<()> {
        let found: Vec<usize> = self
            .inputs
            .iter()
            .chain(self.targets.iter())
            .map(Vec::len)
            .filter(|&len| len != expected)
            .collect();

        if found.is_empty() {
            Ok(())
        } else {
            Err(Error::ShapeMismatch { expected, found })
        }
    }

    /// Number of training examples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// True when no pairs were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// One-hot input rows, paired by position with [`Self::targets`].
    #[must_use]
    pub fn inputs(&self) -> &[Vec<f32>] {
        &self.inputs
    }

    /// One-hot target rows, paired by position with [`Self::inputs`].
    #[must_use]
    pub fn targets(&self) -> &[Vec<f32>] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::OrderItem;
    use proptest::prelude::*;

    fn item(id: i64) -> OrderItem {
        OrderItem {
            product_id: Some(id),
            name: format!("product-{id}"),
            category: "test".to_string(),
        }
    }

    fn order(ids: &[i64]) -> Order {
        Order {
            items: ids.iter().copied().map(item).collect(),
        }
    }

    fn hot_slot(row: &[f32]) -> usize {
        let hots: Vec<usize> = row
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0.0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(hots.len(), 1, "row must have exactly one hot entry");
        assert_eq!(row[hots[0]], 1.0);
        hots[0]
    }

    #[test]
    fn two_order_history_emits_four_pairs() {
        let orders = vec![order(&[1, 2]), order(&[2, 3])];
        let catalog = ProductCatalog::from_orders(&orders);
        assert_eq!(catalog.num_products(), 3);

        let set = TrainingSet::from_orders(&orders, &catalog);
        assert_eq!(set.len(), 4);

        // Every example is one-hot on both sides with distinct hot slots
        // drawn from the same order.
        for (input, target) in set.inputs().iter().zip(set.targets()) {
            assert_ne!(hot_slot(input), hot_slot(target));
        }
    }

    #[test]
    fn duplicate_items_emit_duplicate_pairs() {
        // Two copies of product 1 next to product 2: each copy pairs with
        // product 2 in both directions, but the copies never pair with each
        // other. Duplicates are intentionally kept.
        let orders = vec![order(&[1, 1, 2])];
        let catalog = ProductCatalog::from_orders(&orders);
        let set = TrainingSet::from_orders(&orders, &catalog);

        assert_eq!(set.len(), 4);
        let pairs: Vec<(usize, usize)> = set
            .inputs()
            .iter()
            .zip(set.targets())
            .map(|(i, t)| (hot_slot(i), hot_slot(t)))
            .collect();
        assert_eq!(pairs.iter().filter(|&&p| p == (0, 1)).count(), 2);
        assert_eq!(pairs.iter().filter(|&&p| p == (1, 0)).count(), 2);
    }

    #[test]
    fn unindexed_items_are_dropped() {
        // Catalog built from a narrower history than the generator sees.
        let indexed = vec![order(&[1, 2])];
        let catalog = ProductCatalog::from_orders(&indexed);

        let wider = vec![order(&[1, 2, 99])];
        let set = TrainingSet::from_orders(&wider, &catalog);
        assert_eq!(set.len(), 2);
        for row in set.inputs().iter().chain(set.targets()) {
            assert_eq!(row.len(), 2);
        }
    }

    #[test]
    fn verify_accepts_consistent_set() {
        let orders = vec![order(&[1, 2, 3])];
        let catalog = ProductCatalog::from_orders(&orders);
        let set = TrainingSet::from_orders(&orders, &catalog);
        set.verify_consistency(catalog.num_products())
            .expect("consistent set");
    }

    #[test]
    fn verify_rejects_truncated_vector() {
        let orders = vec![order(&[1, 2, 3])];
        let catalog = ProductCatalog::from_orders(&orders);
        let mut set = TrainingSet::from_orders(&orders, &catalog);
        set.targets[1].pop();

        let err = set
            .verify_consistency(catalog.num_products())
            .expect_err("truncated row must be rejected");
        match err {
            Error::ShapeMismatch { expected, found } => {
                assert_eq!(expected, 3);
                assert_eq!(found, vec![2]);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    proptest! {
        // An order with k distinct products emits exactly k·(k-1) ordered
        // pairs: self-pairs are excluded, direction matters.
        #[test]
        fn distinct_order_emits_k_times_k_minus_one(k in 1usize..8) {
            let ids: Vec<i64> = (1..=k as i64).collect();
            let orders = vec![order(&ids)];
            let catalog = ProductCatalog::from_orders(&orders);
            let set = TrainingSet::from_orders(&orders, &catalog);

            prop_assert_eq!(set.len(), k * (k - 1));
            for (input, target) in set.inputs().iter().zip(set.targets()) {
                prop_assert_eq!(input.len(), k);
                prop_assert_eq!(target.len(), k);
                prop_assert_ne!(hot_slot(input), hot_slot(target));
            }
        }
    }
}
