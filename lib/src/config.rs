//! Training hyperparameters.

use crate::error::{Result, WeightsError};
use crate::export::WEIGHTS_FILE;
use crate::optimizer::LearningRate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything that determines one training run and where its output goes.
///
/// Override individual fields with struct-update syntax:
///
/// ```
/// use gomoku_weights::config::TrainingConfig;
///
/// let config = TrainingConfig {
///     n_samples: 500,
///     seed: 42,
///     ..Default::default()
/// };
/// assert_eq!(config.max_epochs, 1000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Seed for the synthetic data generator.
    pub seed: u64,
    pub n_samples: usize,
    pub max_epochs: usize,
    /// Early-stopping tolerance on the epoch loss; `None` runs all epochs.
    pub tol: Option<f64>,
    pub n_iter_no_change: usize,
    pub learning_rate: LearningRate,
    /// L2 penalty strength.
    pub alpha: f64,
    pub batch_size: usize,
    pub output: PathBuf,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            n_samples: 2000,
            max_epochs: 1000,
            tol: Some(1e-3),
            n_iter_no_change: 5,
            learning_rate: LearningRate::default(),
            alpha: 1e-4,
            batch_size: 1,
            output: PathBuf::from(WEIGHTS_FILE),
        }
    }
}

impl TrainingConfig {
    /// Rejects settings the trainer cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.n_samples == 0 {
            return Err(WeightsError::InvalidParameter("n_samples must be > 0".into()));
        }
        if self.batch_size == 0 {
            return Err(WeightsError::InvalidParameter("batch_size must be > 0".into()));
        }
        if self.n_iter_no_change == 0 {
            return Err(WeightsError::InvalidParameter(
                "n_iter_no_change must be > 0".into(),
            ));
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(WeightsError::InvalidParameter(format!(
                "alpha must be finite and >= 0, got {}",
                self.alpha
            )));
        }
        if let Some(tol) = self.tol {
            if !tol.is_finite() {
                return Err(WeightsError::InvalidParameter(format!(
                    "tol must be finite, got {tol}"
                )));
            }
        }
        let eta0 = self.learning_rate.eta0();
        if !(eta0.is_finite() && eta0 > 0.0) {
            return Err(WeightsError::InvalidParameter(format!(
                "eta0 must be finite and > 0, got {eta0}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_run() {
        let config = TrainingConfig::default();

        assert_eq!(config.seed, 0);
        assert_eq!(config.n_samples, 2000);
        assert_eq!(config.max_epochs, 1000);
        assert_eq!(config.tol, Some(1e-3));
        assert_eq!(config.n_iter_no_change, 5);
        assert_eq!(config.alpha, 1e-4);
        assert_eq!(config.batch_size, 1);
        assert_eq!(config.output, PathBuf::from("gomoku_weights.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad = [
            TrainingConfig {
                n_samples: 0,
                ..Default::default()
            },
            TrainingConfig {
                batch_size: 0,
                ..Default::default()
            },
            TrainingConfig {
                n_iter_no_change: 0,
                ..Default::default()
            },
            TrainingConfig {
                alpha: -1.0,
                ..Default::default()
            },
            TrainingConfig {
                tol: Some(f64::NAN),
                ..Default::default()
            },
            TrainingConfig {
                learning_rate: LearningRate::Constant { eta0: 0.0 },
                ..Default::default()
            },
        ];

        for config in bad {
            assert!(matches!(
                config.validate(),
                Err(WeightsError::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: TrainingConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();

        assert_eq!(config.seed, 7);
        assert_eq!(config.n_samples, 2000);
        assert_eq!(config.learning_rate, LearningRate::default());
    }

    #[test]
    fn test_json_round_trip() {
        let config = TrainingConfig {
            learning_rate: LearningRate::Constant { eta0: 0.05 },
            tol: None,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: TrainingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
