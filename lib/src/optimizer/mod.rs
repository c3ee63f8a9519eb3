use crate::backend::{Backend, Scalar};
use crate::model::linear::LinearParams;
use serde::{Deserialize, Serialize};

/// Gradient-based parameter update rule.
///
/// The trainer is decoupled from the update rule: any model can be paired
/// with any optimizer for its parameter type, without dynamic dispatch.
///
/// # Example
/// ```rust
/// use gomoku_weights::backend::{CpuBackend, Scalar, Tensor1D};
/// use gomoku_weights::model::linear::LinearParams;
/// use gomoku_weights::optimizer::{Optimizer, SGD};
///
/// let params = LinearParams {
///     weights: Tensor1D::<CpuBackend>::new(vec![1.0, 2.0]),
///     bias: Scalar::<CpuBackend>::new(0.5),
/// };
/// let grads = LinearParams {
///     weights: Tensor1D::<CpuBackend>::new(vec![10.0, -10.0]),
///     bias: Scalar::<CpuBackend>::new(1.0),
/// };
///
/// let mut sgd = SGD::<CpuBackend>::new(0.1);
/// let updated = sgd.step(&params, &grads);
/// assert_eq!(updated.weights.to_vec(), vec![0.0, 3.0]);
/// ```
pub trait Optimizer<B: Backend, P> {
    /// Returns `params - lr · gradients` for the current step, then advances
    /// any internal schedule.
    fn step(&mut self, params: &P, gradients: &P) -> P;
}

/// How the SGD step size evolves over updates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum LearningRate {
    /// `eta = eta0` for every update.
    Constant { eta0: f64 },
    /// `eta = eta0 / t^power_t`, with `t` counting updates from 1.
    InvScaling { eta0: f64, power_t: f64 },
}

impl LearningRate {
    /// Step size for update number `t` (1-based).
    ///
    /// ```
    /// use gomoku_weights::optimizer::LearningRate;
    ///
    /// let schedule = LearningRate::InvScaling { eta0: 0.01, power_t: 0.25 };
    /// assert_eq!(schedule.eta(1), 0.01);
    /// assert!((schedule.eta(16) - 0.005).abs() < 1e-15);
    /// ```
    pub fn eta(&self, t: u64) -> f64 {
        match *self {
            LearningRate::Constant { eta0 } => eta0,
            LearningRate::InvScaling { eta0, power_t } => eta0 / (t.max(1) as f64).powf(power_t),
        }
    }

    pub fn eta0(&self) -> f64 {
        match *self {
            LearningRate::Constant { eta0 } | LearningRate::InvScaling { eta0, .. } => eta0,
        }
    }
}

impl Default for LearningRate {
    fn default() -> Self {
        LearningRate::InvScaling {
            eta0: 0.01,
            power_t: 0.25,
        }
    }
}

/// Stochastic gradient descent: `θ ← θ - η_t · ∇L(θ)`.
///
/// Only the update counter is mutable state; momentum or adaptive variants
/// belong in separate optimizers.
#[derive(Clone, Debug)]
pub struct SGD<B: Backend> {
    schedule: LearningRate,
    t: u64,
    _backend: std::marker::PhantomData<B>,
}

impl<B: Backend> SGD<B> {
    /// SGD with a constant learning rate.
    pub fn new(lr: f64) -> Self {
        Self::with_schedule(LearningRate::Constant { eta0: lr })
    }

    pub fn with_schedule(schedule: LearningRate) -> Self {
        Self {
            schedule,
            t: 1,
            _backend: std::marker::PhantomData,
        }
    }

    /// Step size the next update will use.
    pub fn learning_rate(&self) -> f64 {
        self.schedule.eta(self.t)
    }

    pub fn schedule(&self) -> LearningRate {
        self.schedule
    }

    /// Number of updates applied so far.
    pub fn steps_taken(&self) -> u64 {
        self.t - 1
    }
}

impl<B: Backend> Optimizer<B, LinearParams<B>> for SGD<B> {
    fn step(&mut self, params: &LinearParams<B>, grads: &LinearParams<B>) -> LinearParams<B> {
        let lr = Scalar::<B>::new(self.learning_rate());
        self.t += 1;

        let neg_lr = Scalar::<B>::new(0.0) - lr;
        LinearParams {
            weights: params.weights.add(&grads.weights.scale(&neg_lr)),
            bias: params.bias - grads.bias * lr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CpuBackend, Tensor1D};

    fn params(weights: Vec<f64>, bias: f64) -> LinearParams<CpuBackend> {
        LinearParams {
            weights: Tensor1D::new(weights),
            bias: Scalar::new(bias),
        }
    }

    #[test]
    fn test_sgd_new_initialization() {
        let sgd = SGD::<CpuBackend>::new(0.01);

        assert_eq!(sgd.learning_rate(), 0.01);
        assert_eq!(sgd.steps_taken(), 0);
        assert_eq!(sgd.schedule(), LearningRate::Constant { eta0: 0.01 });
    }

    #[test]
    fn test_sgd_step_correctness() {
        let mut sgd = SGD::<CpuBackend>::new(0.1);
        let updated = sgd.step(&params(vec![2.0, 3.0], 1.0), &params(vec![1.0, -1.0], 0.5));

        let w = updated.weights.to_vec();
        assert!((w[0] - 1.9).abs() < 1e-12);
        assert!((w[1] - 3.1).abs() < 1e-12);
        assert!((updated.bias.to_f64() - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_sgd_zero_gradients_leave_params() {
        let mut sgd = SGD::<CpuBackend>::new(0.5);
        let updated = sgd.step(&params(vec![1.0, 2.0], 3.0), &params(vec![0.0, 0.0], 0.0));

        assert_eq!(updated.weights.to_vec(), vec![1.0, 2.0]);
        assert_eq!(updated.bias.to_f64(), 3.0);
    }

    #[test]
    fn test_sgd_does_not_mutate_inputs() {
        let mut sgd = SGD::<CpuBackend>::new(0.1);
        let p = params(vec![1.0], 1.0);
        let g = params(vec![1.0], 1.0);

        let _ = sgd.step(&p, &g);

        assert_eq!(p.weights.to_vec(), vec![1.0]);
        assert_eq!(g.bias.to_f64(), 1.0);
    }

    #[test]
    fn test_invscaling_decays_per_step() {
        let mut sgd = SGD::<CpuBackend>::with_schedule(LearningRate::InvScaling {
            eta0: 0.01,
            power_t: 0.5,
        });
        assert_eq!(sgd.learning_rate(), 0.01);

        let p = params(vec![0.0], 0.0);
        for _ in 0..3 {
            let _ = sgd.step(&p, &p);
        }

        // t = 4 -> 0.01 / 2
        assert_eq!(sgd.steps_taken(), 3);
        assert!((sgd.learning_rate() - 0.005).abs() < 1e-15);
    }

    #[test]
    fn test_constant_schedule_never_decays() {
        let schedule = LearningRate::Constant { eta0: 0.2 };
        assert_eq!(schedule.eta(1), 0.2);
        assert_eq!(schedule.eta(10_000), 0.2);
        assert_eq!(schedule.eta0(), 0.2);
    }

    #[test]
    fn test_default_schedule() {
        assert_eq!(
            LearningRate::default(),
            LearningRate::InvScaling {
                eta0: 0.01,
                power_t: 0.25
            }
        );
    }
}
