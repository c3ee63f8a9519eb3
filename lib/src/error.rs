//! Crate-wide error type.

use std::io;

/// Errors raised while generating data, fitting, or exporting weights.
#[derive(Debug, thiserror::Error)]
pub enum WeightsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A weight vector or feature row has the wrong length.
    #[error("Feature mismatch: expected {expected} features, got {got}")]
    FeatureMismatch { expected: usize, got: usize },

    /// NaN or infinity where a finite number is required.
    #[error("Non-finite value: {0}")]
    NonFinite(String),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A dataset failed to produce a batch.
    #[error("Data error: {0}")]
    Data(String),

    #[error("training diverged at epoch {epoch}: loss is not finite")]
    Diverged { epoch: usize },
}

pub type Result<T> = std::result::Result<T, WeightsError>;
