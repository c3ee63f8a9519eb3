use crate::backend::{Backend, Scalar, Tensor1D};

/// A differentiable loss used during training.
///
/// Implementors provide the scalar loss (for logging and early stopping) and
/// the gradient w.r.t. the model's predictions, which is fed to
/// `TrainableModel::backward`.
pub trait Loss<B: Backend> {
    type Prediction;
    type Target;

    /// Scalar loss value averaged over the batch.
    fn loss(&self, prediction: &Self::Prediction, target: &Self::Target) -> Scalar<B>;

    /// `∂L/∂prediction`.
    fn grad_wrt_prediction(
        &self,
        prediction: &Self::Prediction,
        target: &Self::Target,
    ) -> Self::Prediction;
}

/// Mean squared error: `L = (1/n) · Σ(predᵢ - targetᵢ)²`.
///
/// Gradient w.r.t. prediction: `(pred - target) / n`. The factor of 2 is
/// absorbed into the learning rate.
#[derive(Clone, Copy, Debug, Default)]
pub struct MSELoss;

impl<B: Backend> Loss<B> for MSELoss {
    type Prediction = Tensor1D<B>;
    type Target = Tensor1D<B>;

    fn loss(&self, pred: &Self::Prediction, target: &Self::Target) -> Scalar<B> {
        let diff = pred.sub(target);
        diff.dot(&diff) / Scalar::<B>::new(diff.len() as f64)
    }

    fn grad_wrt_prediction(&self, pred: &Self::Prediction, target: &Self::Target) -> Tensor1D<B> {
        let n = Scalar::<B>::new(1. / pred.len() as f64);
        pred.sub(target).scale(&n)
    }
}
