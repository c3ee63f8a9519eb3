//! End-to-end weight training: synthetic data, fit, export.
//!
//! The fitting routine is reached only through [`LinearFitter`], so any
//! regressor producing `(w, b)` can stand in for [`SgdRegressor`].

use crate::backend::CpuBackend;
use crate::config::TrainingConfig;
use crate::dataset::{InMemoryDataset, SyntheticBoards};
use crate::error::Result;
use crate::export::GomokuWeights;
use crate::loss::MSELoss;
use crate::model::linear::{LinearModel, LinearRegression};
use crate::model::Fitted;
use crate::optimizer::{LearningRate, SGD};
use crate::regularizers::L2;
use crate::trainer::Trainer;

/// Fits `y ≈ w·x + b` to a dataset.
pub trait LinearFitter {
    fn fit(&self, data: &InMemoryDataset) -> Result<LinearModel<CpuBackend, Fitted>>;
}

/// Squared-loss SGD with an L2 penalty and early stopping.
#[derive(Debug, Clone, PartialEq)]
pub struct SgdRegressor {
    pub learning_rate: LearningRate,
    pub alpha: f64,
    pub max_epochs: usize,
    pub tol: Option<f64>,
    pub n_iter_no_change: usize,
    pub batch_size: usize,
}

impl SgdRegressor {
    pub fn from_config(config: &TrainingConfig) -> Self {
        Self {
            learning_rate: config.learning_rate,
            alpha: config.alpha,
            max_epochs: config.max_epochs,
            tol: config.tol,
            n_iter_no_change: config.n_iter_no_change,
            batch_size: config.batch_size,
        }
    }
}

impl Default for SgdRegressor {
    fn default() -> Self {
        Self::from_config(&TrainingConfig::default())
    }
}

impl LinearFitter for SgdRegressor {
    fn fit(&self, data: &InMemoryDataset) -> Result<LinearModel<CpuBackend, Fitted>> {
        let trainer = Trainer::builder(
            MSELoss,
            SGD::<CpuBackend>::with_schedule(self.learning_rate),
            L2::<CpuBackend>::new(self.alpha),
        )
        .batch_size(self.batch_size)
        .max_epochs(self.max_epochs)
        .tol(self.tol)
        .n_iter_no_change(self.n_iter_no_change)
        .build();

        trainer.fit(LinearRegression::<CpuBackend>::new(data.n_features()), data)
    }
}

/// Generates the synthetic boards described by `config`, fits them and
/// returns the exportable weights.
pub fn train_weights<F: LinearFitter>(fitter: &F, config: &TrainingConfig) -> Result<GomokuWeights> {
    config.validate()?;
    let data = SyntheticBoards::generate(config.n_samples, config.seed)?;
    log::info!(
        "training on {} samples with {} features",
        data.n_samples(),
        data.n_features()
    );

    let model = fitter.fit(&data)?;
    let weights = GomokuWeights::try_from(&model)?;
    log::debug!("w = {:?}, b = {}", weights.weights(), weights.bias());
    Ok(weights)
}

/// [`train_weights`], then writes the result to `config.output`.
pub fn run<F: LinearFitter>(fitter: &F, config: &TrainingConfig) -> Result<GomokuWeights> {
    let weights = train_weights(fitter, config)?;
    weights.write_to(&config.output)?;
    Ok(weights)
}
