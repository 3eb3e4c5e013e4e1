pub mod state;
pub use state::{Fitted, Unfitted};

pub mod offset_linear;
pub use offset_linear::{OffsetLinearModel, OffsetLinearParams};

/// A model that can be trained by per-sample gradient descent.
///
/// The trainer drives the loop; the model only knows how to run a forward
/// pass, turn a loss gradient into parameter gradients, and swap parameters.
pub trait TrainableModel {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    fn forward(&self, input: &Self::Input) -> Self::Prediction;

    /// Computes parameter gradients given the gradient of the loss
    /// w.r.t. the prediction (as returned by `Loss::grad_wrt_prediction`).
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;

    fn params(&self) -> &Self::Params;
    fn update_params(&mut self, new_params: &Self::Params);

    /// Consumes the model, producing its inference-only counterpart.
    fn into_fitted(self) -> Self::Output;
}

/// Inference interface for a trained model.
pub trait InferenceModel {
    type Input;
    type Output;

    fn predict(&self, input: &Self::Input) -> Self::Output;

    fn predict_batch(&self, inputs: &[Self::Input]) -> Vec<Self::Output>;
}
