/// A marker type indicating that a model is **not yet trained**.
///
/// Used as a generic parameter (e.g., `OffsetLinearModel<Unfitted>`) so the
/// type system enforces the training lifecycle:
/// - `Trainer::fit` only accepts an `Unfitted` model.
/// - `predict` is **not available** until the model is converted to `Fitted`.
pub struct Unfitted;

/// A marker type indicating that a model has been **trained**.
///
/// Produced by `Trainer::fit` (via `into_fitted`). A `Fitted` model carries
/// only the learned parameters and exposes inference and serialization.
pub struct Fitted;
