//! The feed-forward co-purchase model and the seam it hides behind.
//!
//! The architecture is fixed: one hidden dense layer of 32 units with
//! rectified-linear activation, then a dense output layer over all product
//! slots whose softmax yields a probability distribution. Training runs
//! full-batch for a fixed number of epochs with an adaptive-moment optimizer
//! at the library-default learning rate.
//!
//! Everything outside this module talks to the network through
//! [`Predictor`], so indexing, pair generation, and ranking stay independent
//! of the numeric backend.

use candle_core::{DType, Device, Tensor, D};
use candle_nn::{linear, ops, AdamW, Linear, Module, Optimizer, ParamsAdamW, VarBuilder, VarMap};

use crate::error::{Error, Result};
use crate::training::TrainingSet;

/// Training hyperparameters. These are compile-time choices surfaced as a
/// struct so tests can shrink them; the service always trains with
/// [`TrainConfig::default`].
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Width of the hidden dense layer.
    pub hidden_dim: usize,
    /// Number of full-batch training epochs.
    pub epochs: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            hidden_dim: 32,
            epochs: 100,
        }
    }
}

/// Narrow inference seam over the numeric backend.
///
/// `input` is a one-hot row over product slots; the returned vector holds
/// one probability per slot, in slot order.
pub trait Predictor: Send + Sync {
    /// Scores a single one-hot input row, returning one probability per
    /// product slot.
    fn predict(&self, input: &[f32]) -> Result<Vec<f32>>;
}

/// Two-layer dense network trained on co-purchase pairs.
///
/// Created once at startup via [`CopurchaseNet::fit`] and immutable
/// afterwards, so it can be shared read-only across concurrent requests.
#[derive(Debug)]
pub struct CopurchaseNet {
    hidden: Linear,
    output: Linear,
    device: Device,
}

impl CopurchaseNet {
    /// Fits the network on the generated training pairs.
    ///
    /// Emits one `tracing` progress line per epoch with the epoch's loss
    /// and training accuracy. There is no retry and no partial model: any
    /// backend failure aborts the fit.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Training`] when the training set is empty, when the
    /// input and target counts disagree, or when the backend fails.
    pub fn fit(set: &TrainingSet, num_products: usize, config: &TrainConfig) -> Result<Self> {
        if set.is_empty() {
            return Err(Error::Training("training set is empty".to_string()));
        }
        if set.inputs().len() != set.targets().len() {
            return Err(Error::Training(format!(
                "input/target count mismatch: {} inputs vs {} targets",
                set.inputs().len(),
                set.targets().len()
            )));
        }

        let device = Device::Cpu;
        let examples = set.len();
        let xs = rows_to_tensor(set.inputs(), examples, num_products, &device)?;
        let ys = rows_to_tensor(set.targets(), examples, num_products, &device)?;

        let varmap = VarMap::new();
        let vb = VarBuilder::from_varmap(&varmap, DType::F32, &device);
        let hidden = linear(num_products, config.hidden_dim, vb.pp("hidden")).map_err(train_err)?;
        let output = linear(config.hidden_dim, num_products, vb.pp("output")).map_err(train_err)?;

        let net = Self {
            hidden,
            output,
            device,
        };

        // Weight decay zeroed so the update rule is plain adaptive-moment
        // descent at the library-default learning rate.
        let params = ParamsAdamW {
            weight_decay: 0.0,
            ..ParamsAdamW::default()
        };
        let mut optimizer = AdamW::new(varmap.all_vars(), params).map_err(train_err)?;

        for epoch in 1..=config.epochs {
            let logits = net.forward(&xs).map_err(train_err)?;
            let loss = cross_entropy(&logits, &ys).map_err(train_err)?;
            optimizer.backward_step(&loss).map_err(train_err)?;

            let loss_value = loss.to_scalar::<f32>().map_err(train_err)?;
            let accuracy = batch_accuracy(&logits, &ys).map_err(train_err)?;
            tracing::info!(epoch, loss = loss_value, accuracy, "training epoch complete");
        }

        Ok(net)
    }

    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        self.output.forward(&self.hidden.forward(xs)?.relu()?)
    }
}

impl Predictor for CopurchaseNet {
    fn predict(&self, input: &[f32]) -> Result<Vec<f32>> {
        let xs = Tensor::from_vec(input.to_vec(), (1, input.len()), &self.device)
            .map_err(infer_err)?;
        let logits = self.forward(&xs).map_err(infer_err)?;
        let probabilities = ops::softmax(&logits, D::Minus1).map_err(infer_err)?;
        probabilities
            .squeeze(0)
            .and_then(|row| row.to_vec1::<f32>())
            .map_err(infer_err)
    }
}

/// Categorical cross-entropy of `logits` against one-hot `targets`,
/// averaged over the batch.
fn cross_entropy(logits: &Tensor, targets: &Tensor) -> candle_core::Result<Tensor> {
    let log_probs = ops::log_softmax(logits, D::Minus1)?;
    (log_probs * targets)?.sum(D::Minus1)?.mean_all()?.neg()
}

/// Fraction of rows whose arg-max prediction hits the target's hot slot.
fn batch_accuracy(logits: &Tensor, targets: &Tensor) -> candle_core::Result<f32> {
    let predicted = logits.argmax(D::Minus1)?;
    let expected = targets.argmax(D::Minus1)?;
    predicted
        .eq(&expected)?
        .to_dtype(DType::F32)?
        .mean_all()?
        .to_scalar::<f32>()
}

fn rows_to_tensor(
    rows: &[Vec<f32>],
    examples: usize,
    width: usize,
    device: &Device,
) -> Result<Tensor> {
    let flat: Vec<f32> = rows.iter().flatten().copied().collect();
    Tensor::from_vec(flat, (examples, width), device).map_err(train_err)
}

fn train_err(err: candle_core::Error) -> Error {
    Error::Training(err.to_string())
}

fn infer_err(err: candle_core::Error) -> Error {
    Error::Inference(err.to_string())
}
