use crate::backend::{Backend, Scalar, Tensor1D};
use crate::model::linear::{LinearParams, LinearRegression};
use crate::model::TrainableModel;

/// Weight penalty added to the loss during training.
///
/// Returns the penalty value and its gradient w.r.t. the model parameters.
pub trait Regularizer<B: Backend, M: TrainableModel<B>> {
    fn regularizer_penalty_grad(&self, model: &M) -> (Scalar<B>, M::Gradients);
}

/// L2 (ridge) penalty: `alpha · ‖w‖²`. The bias is not penalized.
#[derive(Clone, Copy, Debug)]
pub struct L2<B: Backend> {
    alpha: Scalar<B>,
}

impl<B: Backend> L2<B> {
    pub fn new(alpha: f64) -> Self {
        Self {
            alpha: Scalar::new(alpha),
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha.to_f64()
    }
}

impl<B: Backend> Regularizer<B, LinearRegression<B>> for L2<B> {
    fn regularizer_penalty_grad(
        &self,
        model: &LinearRegression<B>,
    ) -> (Scalar<B>, LinearParams<B>) {
        let weights = &model.params().weights;
        let penalty = self.alpha * weights.dot(weights);
        let weight_grad = weights.scale(&(self.alpha * Scalar::new(2.)));

        (
            penalty,
            LinearParams {
                weights: weight_grad,
                bias: Scalar::new(0.),
            },
        )
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoRegularizer;

impl<B: Backend> Regularizer<B, LinearRegression<B>> for NoRegularizer {
    fn regularizer_penalty_grad(
        &self,
        model: &LinearRegression<B>,
    ) -> (Scalar<B>, LinearParams<B>) {
        (
            Scalar::new(0.),
            LinearParams {
                weights: Tensor1D::zeros(model.n_features()),
                bias: Scalar::new(0.),
            },
        )
    }
}
