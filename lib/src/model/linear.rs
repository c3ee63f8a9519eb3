//! Linear regression with compile-time state tracking.
//!
//! - [`LinearRegression`] = `LinearModel<B, Unfitted>`: the trainable form.
//! - `LinearModel<B, Fitted>`: inference only, scores `y = w·x + b`.
//!
//! A fitted model holds nothing but its weights and bias; learning rate,
//! penalty and loss live in the trainer.
pub use crate::backend::{Backend, Scalar, ScalarOps, Tensor1D, Tensor2D};
use crate::error::{Result, WeightsError};
pub use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Trainable parameters of a linear model: weights and bias.
#[derive(Clone)]
pub struct LinearParams<B: Backend> {
    pub weights: Tensor1D<B>,
    pub bias: Scalar<B>,
}

/// Host-side copy of [`LinearParams`], kept in `f64` so exported
/// coefficients are exactly the trained ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerializableLinearParams {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl<B: Backend> From<&LinearParams<B>> for SerializableLinearParams {
    fn from(params: &LinearParams<B>) -> Self {
        Self {
            weights: params.weights.to_vec(),
            bias: params.bias.to_f64(),
        }
    }
}

impl<B: Backend> TryFrom<SerializableLinearParams> for LinearParams<B> {
    type Error = WeightsError;

    fn try_from(value: SerializableLinearParams) -> Result<Self> {
        if value.weights.is_empty() {
            return Err(WeightsError::EmptyData("linear model has no weights".into()));
        }
        Ok(Self {
            weights: Tensor1D::<B>::new(value.weights),
            bias: Scalar::<B>::new(value.bias),
        })
    }
}

impl<B: Backend> ParamOps<B> for LinearParams<B> {
    fn add(&self, other: &Self) -> Self {
        Self {
            weights: self.weights.add(&other.weights),
            bias: self.bias + other.bias,
        }
    }

    fn scale(&self, scalar: Scalar<B>) -> Self {
        Self {
            weights: self.weights.scale(&scalar),
            bias: self.bias * scalar,
        }
    }
}

/// A linear model whose training state is part of its type.
///
/// `predict` exists only on `LinearModel<B, Fitted>`, so an untrained model
/// can never be scored or exported.
pub struct LinearModel<B: Backend, S> {
    params: LinearParams<B>,
    _state: PhantomData<S>,
}

impl<B: Backend, S> LinearModel<B, S> {
    /// Number of input features the model expects.
    pub fn n_features(&self) -> usize {
        self.params.weights.len()
    }
}

impl<B: Backend> LinearModel<B, Fitted> {
    /// Creates a fitted model from trained parameters.
    pub fn new(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}

/// Inference: `y = wᵀx + b`.
impl<B: Backend> InferenceModel<B> for LinearModel<B, Fitted> {
    type InputSingle = Tensor1D<B>;
    type InputBatch = Tensor2D<B>;
    type OutputSingle = Scalar<B>;
    type OutputBatch = Tensor1D<B>;
    type ParamsRepr = SerializableLinearParams;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle {
        self.params.weights.dot(input) + self.params.bias
    }

    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch {
        input
            .dot(&self.params.weights)
            .add_scalar(&self.params.bias)
    }

    fn extract_params(&self) -> Self::ParamsRepr {
        (&self.params).into()
    }

    fn from_params(params: Self::ParamsRepr) -> Result<Self> {
        Ok(Self::new(LinearParams::<B>::try_from(params)?))
    }
}

/// Training interface.
///
/// Forward: `X·w + b`. Backward: `∇w = Xᵀ·g`, `∇b = Σg`.
impl<B: Backend> TrainableModel<B> for LinearModel<B, Unfitted> {
    type Params = LinearParams<B>;
    type Gradients = LinearParams<B>;
    type Prediction = Tensor1D<B>;
    type Input = Tensor2D<B>;
    type Output = LinearModel<B, Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        x.dot(&self.params.weights).add_scalar(&self.params.bias)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        LinearParams {
            weights: x.tdot(grad_output),
            bias: grad_output.sum(),
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.params = params.clone();
    }

    fn into_fitted(self) -> LinearModel<B, Fitted> {
        LinearModel::<B, Fitted>::new(self.params)
    }
}

/// An unfitted linear model, the input to [`Trainer::fit`](crate::trainer::Trainer::fit).
pub type LinearRegression<B> = LinearModel<B, Unfitted>;

impl<B: Backend> LinearRegression<B> {
    /// Zero-initialized weights and bias for `n_features` inputs.
    pub fn new(n_features: usize) -> Self {
        Self::from_params(LinearParams {
            weights: Tensor1D::<B>::zeros(n_features),
            bias: Scalar::<B>::new(0.),
        })
    }

    /// Warm start from explicit parameters.
    pub fn from_params(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}

/// CPU linear regression.
///
/// ```rust
/// use gomoku_weights::model::linear::LinearRegressor;
///
/// let model = LinearRegressor::new(6);
/// assert_eq!(model.n_features(), 6);
/// ```
pub type LinearRegressor = LinearRegression<crate::backend::CpuBackend>;
