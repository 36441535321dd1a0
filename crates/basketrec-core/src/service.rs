//! Service context: the single long-lived owner of the catalog and the
//! trained model.
//!
//! Built once at startup and shared read-only afterwards, so request
//! handlers need no synchronization: they only read the context and allocate
//! request-local vectors.

use std::cmp::Ordering;
use std::path::Path;

use crate::catalog::{Product, ProductCatalog};
use crate::error::{Error, Result};
use crate::model::{CopurchaseNet, Predictor, TrainConfig};
use crate::orders::load_orders;
use crate::training::{one_hot, TrainingSet};

/// Maximum number of recommendations returned per request.
pub const TOP_K: usize = 5;

/// Immutable bundle of everything a recommendation request needs.
pub struct RecommendContext {
    catalog: ProductCatalog,
    model: Box<dyn Predictor>,
}

impl std::fmt::Debug for RecommendContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendContext")
            .field("catalog", &self.catalog)
            .field("model", &"<dyn Predictor>")
            .finish()
    }
}

impl RecommendContext {
    /// Assembles a context from an already-built catalog and model.
    ///
    /// Mostly useful for tests that substitute a deterministic predictor.
    #[must_use]
    pub fn new(catalog: ProductCatalog, model: Box<dyn Predictor>) -> Self {
        Self { catalog, model }
    }

    /// Runs the full startup pipeline: load the order history, index the
    /// products, generate co-purchase pairs, verify their shape, and fit
    /// the model.
    ///
    /// # Errors
    ///
    /// Any [`Error::DataLoad`], [`Error::ShapeMismatch`], or
    /// [`Error::Training`] is returned unchanged; all of them are fatal to
    /// startup.
    pub fn bootstrap(data_path: impl AsRef<Path>) -> Result<Self> {
        let orders = load_orders(&data_path)?;
        let catalog = ProductCatalog::from_orders(&orders);
        tracing::info!(
            orders = orders.len(),
            products = catalog.num_products(),
            "indexed order history"
        );

        let set = TrainingSet::from_orders(&orders, &catalog);
        set.verify_consistency(catalog.num_products())?;
        tracing::info!(examples = set.len(), "generated co-purchase pairs");

        let net = CopurchaseNet::fit(&set, catalog.num_products(), &TrainConfig::default())?;
        Ok(Self::new(catalog, Box::new(net)))
    }

    /// The product catalog backing this context.
    #[must_use]
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Top co-purchase recommendations for an external product id.
    ///
    /// Scores every product slot with the model, sorts descending by
    /// probability (stable, so ties keep slot order), and returns the first
    /// [`TOP_K`] products (fewer when the catalog is smaller). The queried
    /// product is not explicitly excluded; it only appears if the model
    /// assigns it enough probability.
    ///
    /// # Errors
    ///
    /// [`Error::ProductNotFound`] when the id was never indexed, and
    /// [`Error::Inference`] when the backend fails or returns a row of the
    /// wrong width.
    pub fn recommend(&self, product_id: i64) -> Result<Vec<Product>> {
        let slot = self
            .catalog
            .slot_of(product_id)
            .ok_or(Error::ProductNotFound(product_id))?;

        let input = one_hot(self.catalog.num_products(), slot);
        let probabilities = self.model.predict(&input)?;
        if probabilities.len() != self.catalog.num_products() {
            return Err(Error::Inference(format!(
                "backend returned {} scores for {} products",
                probabilities.len(),
                self.catalog.num_products()
            )));
        }

        let mut ranked: Vec<(usize, f32)> = probabilities.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        Ok(ranked
            .into_iter()
            .take(TOP_K)
            .filter_map(|(slot, _)| self.catalog.product_at(slot).cloned())
            .collect())
    }
}
