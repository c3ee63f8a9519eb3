//! The weights file consumed by the Gomoku engine.
//!
//! Format (UTF-8, 2-space indentation):
//!
//! ```json
//! {
//!   "w": [0.1, 0.2, -0.3, 0.4, -0.5, 0.6],
//!   "b": 0.05
//! }
//! ```
//!
//! `w` is ordered as [`Feature::ALL`](crate::features::Feature::ALL).

use crate::backend::Backend;
use crate::error::{Result, WeightsError};
use crate::features::{Feature, FEATURE_COUNT};
use crate::model::linear::LinearModel;
use crate::model::{Fitted, InferenceModel};
use crate::serialization::SerializableParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Output file name, relative to the working directory.
pub const WEIGHTS_FILE: &str = "gomoku_weights.json";

/// Evaluator coefficients: one weight per feature and a bias.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawWeights")]
pub struct GomokuWeights {
    w: [f64; FEATURE_COUNT],
    b: f64,
}

/// Wire shape accepted on load, before the length check.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawWeights {
    w: Vec<f64>,
    b: f64,
}

impl TryFrom<RawWeights> for GomokuWeights {
    type Error = WeightsError;

    fn try_from(raw: RawWeights) -> Result<Self> {
        GomokuWeights::from_slice(&raw.w, raw.b)
    }
}

impl GomokuWeights {
    pub fn new(w: [f64; FEATURE_COUNT], b: f64) -> Self {
        Self { w, b }
    }

    /// Builds weights from a slice, which must hold exactly
    /// [`FEATURE_COUNT`] values.
    ///
    /// ```
    /// use gomoku_weights::error::WeightsError;
    /// use gomoku_weights::export::GomokuWeights;
    ///
    /// let err = GomokuWeights::from_slice(&[1.0, 2.0], 0.0).unwrap_err();
    /// assert!(matches!(err, WeightsError::FeatureMismatch { expected: 6, got: 2 }));
    /// ```
    pub fn from_slice(w: &[f64], b: f64) -> Result<Self> {
        let w: [f64; FEATURE_COUNT] = w.try_into().map_err(|_| WeightsError::FeatureMismatch {
            expected: FEATURE_COUNT,
            got: w.len(),
        })?;
        Ok(Self { w, b })
    }

    pub fn weights(&self) -> &[f64; FEATURE_COUNT] {
        &self.w
    }

    pub fn bias(&self) -> f64 {
        self.b
    }

    pub fn weight(&self, feature: Feature) -> f64 {
        self.w[feature.index()]
    }

    /// `w·x + b` for one feature vector.
    pub fn score(&self, x: &[f64; FEATURE_COUNT]) -> f64 {
        self.w.iter().zip(x).map(|(w, x)| w * x).sum::<f64>() + self.b
    }

    fn ensure_finite(&self) -> Result<()> {
        for feature in Feature::ALL {
            let value = self.weight(feature);
            if !value.is_finite() {
                return Err(WeightsError::NonFinite(format!("w[{feature}] = {value}")));
            }
        }
        if !self.b.is_finite() {
            return Err(WeightsError::NonFinite(format!("b = {}", self.b)));
        }
        Ok(())
    }

    /// Pretty-printed JSON with keys `w` then `b`.
    ///
    /// ```
    /// use gomoku_weights::export::GomokuWeights;
    ///
    /// let json = GomokuWeights::new([0.0; 6], 0.0).to_json_pretty().unwrap();
    /// assert!(json.starts_with("{\n  \"w\": ["));
    /// ```
    pub fn to_json_pretty(&self) -> Result<String> {
        self.ensure_finite()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the JSON document to `path`, replacing any existing file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.ensure_finite()?;
        let bytes = self.to_bytes()?;
        std::fs::write(path.as_ref(), bytes)?;
        log::info!("wrote weights to {}", path.as_ref().display());
        Ok(())
    }

    /// Writes to [`WEIGHTS_FILE`] in the current directory.
    pub fn save(&self) -> Result<()> {
        self.write_to(WEIGHTS_FILE)
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }
}

impl<B: Backend> TryFrom<&LinearModel<B, Fitted>> for GomokuWeights {
    type Error = WeightsError;

    fn try_from(model: &LinearModel<B, Fitted>) -> Result<Self> {
        let params = model.extract_params();
        GomokuWeights::from_slice(&params.weights, params.bias)
    }
}
