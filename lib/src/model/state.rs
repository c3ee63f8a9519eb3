/// Marker for a model that has **not been trained yet**.
///
/// `LinearModel<B, Unfitted>` implements [`TrainableModel`](super::TrainableModel)
/// and has no `predict`; the trainer consumes it and hands back a `Fitted` model.
pub struct Unfitted;

/// Marker for a model that has **finished training**.
///
/// A `Fitted` model carries only the inference parameters (weights and bias):
/// no optimizer state, loss or hyperparameters. It is what gets exported.
pub struct Fitted;
