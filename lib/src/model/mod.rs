//! Models with their training state encoded in the type.

pub mod linear;
pub mod state;

pub use state::{Fitted, Unfitted};

use crate::backend::{Backend, Scalar};
use crate::error::Result;
use crate::serialization::SerializableParams;
use std::path::Path;

/// Interface the [`Trainer`](crate::trainer::Trainer) drives during fitting.
pub trait TrainableModel<B: Backend> {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    /// Forward pass over a batch.
    fn forward(&self, input: &Self::Input) -> Self::Prediction;

    /// Gradients of the loss w.r.t. the parameters, given `∂L/∂prediction`.
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;

    fn params(&self) -> &Self::Params;

    fn update_params(&mut self, new_params: &Self::Params);

    /// Drops training-only state and returns the inference model.
    fn into_fitted(self) -> Self::Output;
}

/// Arithmetic on parameter sets, used to merge loss and penalty gradients.
pub trait ParamOps<B: Backend>: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, scalar: Scalar<B>) -> Self;
}

/// Prediction and parameter export for a trained model.
pub trait InferenceModel<B: Backend> {
    type InputSingle;
    type OutputSingle;
    type InputBatch;
    type OutputBatch;
    /// Plain host-side representation of the parameters.
    type ParamsRepr;

    fn predict(&self, input: &Self::InputSingle) -> Self::OutputSingle;

    fn predict_batch(&self, input: &Self::InputBatch) -> Self::OutputBatch;

    fn extract_params(&self) -> Self::ParamsRepr;

    fn from_params(params: Self::ParamsRepr) -> Result<Self>
    where
        Self: Sized;

    /// Writes the extracted parameters to `path`, replacing any existing file.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()>
    where
        Self::ParamsRepr: SerializableParams,
    {
        let bytes = self.extract_params().to_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self>
    where
        Self: Sized,
        Self::ParamsRepr: SerializableParams,
    {
        let bytes = std::fs::read(path)?;
        let params = <Self::ParamsRepr as SerializableParams>::from_bytes(&bytes)?;
        Self::from_params(params)
    }
}
