use crate::{
    backend::{Backend, Scalar, Tensor1D, Tensor2D},
    dataset::Dataset,
    error::{Result, WeightsError},
    loss::Loss,
    model::{ParamOps, TrainableModel},
    optimizer::Optimizer,
    regularizers::Regularizer,
};
use std::marker::PhantomData;

/// Orchestrates the training loop for a `TrainableModel`.
///
/// Combines a loss function, optimizer, and regularizer to fit a model on a dataset.
/// Once built via `TrainerBuilder` it is immutable: each call to [`Trainer::fit`]
/// starts from a fresh copy of the optimizer, so the same trainer can be reused
/// across models and produces identical results for identical inputs.
pub struct Trainer<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
{
    pub(crate) batch_size: usize,
    pub(crate) max_epochs: usize,
    pub(crate) tol: Option<f64>,
    pub(crate) n_iter_no_change: usize,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    pub(crate) regularizer: R,
    _phantom_backend: PhantomData<B>,
    _phantom_model: PhantomData<M>,
}

/// Fluent builder for constructing a `Trainer` with custom hyperparameters.
///
/// Defaults:
/// - `batch_size`: 32
/// - `max_epochs`: 1000
/// - `tol`: `None` (always run `max_epochs`)
/// - `n_iter_no_change`: 5
pub struct TrainerBuilder<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
{
    batch_size: usize,
    max_epochs: usize,
    tol: Option<f64>,
    n_iter_no_change: usize,
    loss_fn: L,
    optimizer: O,
    regularizer: R,
    _phantom_backend: PhantomData<B>,
    _phantom_model: PhantomData<M>,
}

impl<B, L, O, M, P, R> TrainerBuilder<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
{
    /// Creates a new `TrainerBuilder` with the given components.
    ///
    /// # Arguments
    /// * `loss_fn` — differentiable loss (e.g., `MSELoss`)
    /// * `optimizer` — parameter updater (e.g., `SGD`)
    /// * `regularizer` — penalty term (e.g., `L2` or `NoRegularizer`)
    pub fn new(loss_fn: L, optimizer: O, regularizer: R) -> Self {
        Self {
            batch_size: 32,
            max_epochs: 1000,
            tol: None,
            n_iter_no_change: 5,
            loss_fn,
            optimizer,
            regularizer,
            _phantom_backend: PhantomData,
            _phantom_model: PhantomData,
        }
    }

    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = size;
        self
    }

    pub fn max_epochs(mut self, epochs: usize) -> Self {
        self.max_epochs = epochs;
        self
    }

    /// Stopping tolerance on the epoch loss.
    ///
    /// An epoch whose loss is not below `best_loss - tol` counts as "no
    /// improvement". `None` disables early stopping.
    pub fn tol(mut self, tol: Option<f64>) -> Self {
        self.tol = tol;
        self
    }

    /// Consecutive non-improving epochs tolerated before stopping.
    pub fn n_iter_no_change(mut self, n: usize) -> Self {
        self.n_iter_no_change = n;
        self
    }

    pub fn build(self) -> Trainer<B, L, O, M, P, R> {
        Trainer {
            batch_size: self.batch_size,
            max_epochs: self.max_epochs,
            tol: self.tol,
            n_iter_no_change: self.n_iter_no_change,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            regularizer: self.regularizer,
            _phantom_backend: PhantomData,
            _phantom_model: PhantomData,
        }
    }
}

impl<B, L, O, M, P, R> Trainer<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B, Target = Tensor1D<B>, Prediction = Tensor1D<B>>,
    M: TrainableModel<
        B,
        Input = Tensor2D<B>,
        Prediction = L::Prediction,
        Params = P,
        Gradients = P,
    >,
    O: Optimizer<B, P> + Clone,
    R: Regularizer<B, M>,
    P: ParamOps<B>,
{
    /// Trains the model on the provided dataset.
    ///
    /// Runs until `max_epochs` is reached or, when `tol` is set, until the
    /// epoch loss fails to improve by at least `tol` for `n_iter_no_change`
    /// consecutive epochs.
    ///
    /// # Errors
    /// - [`WeightsError::InvalidParameter`] if `batch_size` is zero
    /// - [`WeightsError::EmptyData`] if the dataset is empty or its length is unknown
    /// - [`WeightsError::Data`] if a batch fails to load
    /// - [`WeightsError::Diverged`] if the epoch loss becomes NaN or infinite
    ///
    /// # Notes
    /// - Loss is averaged over the entire dataset per epoch, weighting each
    ///   batch by its row count; the penalty is added once per epoch.
    /// - Gradients are averaged per batch before applying regularization.
    pub fn fit<D>(&self, mut model: M, dataset: &D) -> Result<M::Output>
    where
        D: Dataset,
    {
        if self.batch_size == 0 {
            return Err(WeightsError::InvalidParameter(
                "batch_size must be > 0".into(),
            ));
        }
        let n_total = dataset
            .len()
            .ok_or_else(|| WeightsError::EmptyData("dataset length unknown".into()))?;
        if n_total == 0 {
            return Err(WeightsError::EmptyData("dataset is empty".into()));
        }

        let mut optimizer = self.optimizer.clone();
        let mut best_loss = f64::INFINITY;
        let mut no_improvement = 0usize;

        for epoch in 0..self.max_epochs {
            let mut total_loss = Scalar::<B>::new(0.);
            for batch_result in dataset.batches::<B>(self.batch_size) {
                let (batch_x, batch_y) =
                    batch_result.map_err(|e| WeightsError::Data(format!("{e:?}")))?;
                let preds = model.forward(&batch_x);
                let batch_rows = Scalar::<B>::new(batch_y.len() as f64);
                total_loss = total_loss + self.loss_fn.loss(&preds, &batch_y) * batch_rows;
                let (_, reg_grad) = self.regularizer.regularizer_penalty_grad(&model);
                let grad_preds = self.loss_fn.grad_wrt_prediction(&preds, &batch_y);
                let grads = model.backward(&batch_x, &grad_preds);

                let total_grads = grads.add(&reg_grad);
                let new_params = optimizer.step(model.params(), &total_grads);
                model.update_params(&new_params);
            }

            // Per-sample data loss plus the penalty at the end-of-epoch weights.
            let (epoch_penalty, _) = self.regularizer.regularizer_penalty_grad(&model);
            let avg_loss =
                (total_loss / Scalar::<B>::new(n_total as f64) + epoch_penalty).to_f64();
            if !avg_loss.is_finite() {
                log::warn!("epoch {epoch}: loss is {avg_loss}, aborting");
                return Err(WeightsError::Diverged { epoch });
            }
            log::debug!("epoch {epoch}: loss = {avg_loss}");

            if let Some(tol) = self.tol {
                if avg_loss > best_loss - tol {
                    no_improvement += 1;
                } else {
                    no_improvement = 0;
                }
                best_loss = best_loss.min(avg_loss);

                if no_improvement >= self.n_iter_no_change {
                    log::info!(
                        "converged after {} epochs (loss {avg_loss}, best {best_loss})",
                        epoch + 1
                    );
                    return Ok(model.into_fitted());
                }
            }
        }

        log::info!("stopped at max_epochs = {}", self.max_epochs);
        Ok(model.into_fitted())
    }
}

impl<B, L, O, M, P, R> Trainer<B, L, O, M, P, R>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
    R: Regularizer<B, M>,
{
    /// Convenience constructor that starts the builder pattern.
    ///
    /// Equivalent to `TrainerBuilder::new(...)`.
    pub fn builder(loss_fn: L, optimizer: O, regularizer: R) -> TrainerBuilder<B, L, O, M, P, R> {
        TrainerBuilder::new(loss_fn, optimizer, regularizer)
    }
}
