//! # gomoku-weights
//!
//! Trains the linear evaluation function of a Gomoku engine and exports it as
//! `gomoku_weights.json`.
//!
//! A board is scored as `w·x + b`, where `x` counts six patterns
//! (`five, live4, block4, live3, block3, live2`, see [`features`]). This crate
//! generates a seeded synthetic dataset, fits `(w, b)` with stochastic gradient
//! descent and writes the result in the format the engine loads.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: Models carry their training state in the type system
//!   (`Unfitted` vs `Fitted`); only a fitted model can be exported.
//! - **Training/Inference Separation**: Trained models contain only prediction parameters;
//!   training logic lives in separate components (losses, optimizers, trainers).
//! - **Backend Agnosticism**: An abstract `Backend` trait keeps model code
//!   independent of the tensor implementation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gomoku_weights::config::TrainingConfig;
//! use gomoku_weights::pipeline::{run, SgdRegressor};
//!
//! let config = TrainingConfig::default();
//! let weights = run(&SgdRegressor::from_config(&config), &config)?;
//! println!("bias = {}", weights.bias());
//! # Ok::<(), gomoku_weights::error::WeightsError>(())
//! ```
//!
//! ## Module Structure
//!
//! - `backend` — Tensor abstractions and computation primitives (`Tensor1D`, `Tensor2D`)
//! - `model` — Linear model with stateful type parameters
//! - `loss` — Differentiable loss functions
//! - `optimizer` — SGD and learning-rate schedules
//! - `regularizers` — L2 weight penalty
//! - `trainer` — Epoch loop with early stopping
//! - `dataset` — Batching and the synthetic board generator
//! - `features` — The six scored patterns
//! - `export` — The weights file
//! - `pipeline` — Generate, fit, export

pub mod backend;

/// Training hyperparameters and output location.
pub mod config;

/// Data loading utilities and dataset abstractions.
pub mod dataset;

pub mod error;

/// Reading and writing the engine's weights file.
pub mod export;

pub mod features;

/// Differentiable loss functions for model training.
pub mod loss;

/// Linear models with compile-time state safety.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

pub mod pipeline;

/// Weight regularization strategies.
pub mod regularizers;

/// Model persistence helpers.
pub mod serialization;

/// High-level training loop orchestration.
pub mod trainer;

/// Re-export of core backend types for convenient usage.
pub use backend::{Backend, CpuBackend, ScalarOps, Tensor1D, Tensor2D};
pub use config::TrainingConfig;
pub use error::{Result, WeightsError};
pub use export::{GomokuWeights, WEIGHTS_FILE};
pub use features::{Feature, FEATURE_COUNT};
