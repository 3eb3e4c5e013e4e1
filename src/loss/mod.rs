/// A trait for differentiable loss functions used during model training.
///
/// Implementors must define:
/// - How to compute the scalar loss value (for logging/metrics).
/// - How to compute the gradient of the loss w.r.t. the model's prediction.
///
/// This gradient is passed to the model's `backward()` method to obtain
/// parameter gradients.
pub trait Loss {
    type Prediction;
    type Target;

    /// Computes the scalar loss value (for logging/metrics).
    fn loss(&self, prediction: &Self::Prediction, target: &Self::Target) -> f64;

    /// Computes the gradient of the loss w.r.t. the prediction: ∂L/∂pred.
    fn grad_wrt_prediction(
        &self,
        prediction: &Self::Prediction,
        target: &Self::Target,
    ) -> Self::Prediction;
}

/// Per-sample squared error: `L = (pred - target)^2`
///
/// Gradient w.r.t. prediction: `∂L/∂pred = 2 * (pred - target)`
///
/// Note: the factor of 2 is kept (not folded into the learning rate), so a
/// unit learning rate reproduces the textbook update exactly.
pub struct SquaredLoss;

impl Loss for SquaredLoss {
    type Prediction = f64;
    type Target = f64;

    fn loss(&self, pred: &f64, target: &f64) -> f64 {
        let diff = pred - target;
        diff * diff
    }

    fn grad_wrt_prediction(&self, pred: &f64, target: &f64) -> f64 {
        2.0 * (pred - target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_squared_loss() {
        let loss = SquaredLoss;
        // (6 - 10)^2 = 16
        assert_eq!(loss.loss(&6.0, &10.0), 16.0);
    }

    #[test]
    fn test_squared_loss_gradient() {
        let loss = SquaredLoss;
        // 2 * (6 - 10) = -8
        assert_eq!(loss.grad_wrt_prediction(&6.0, &10.0), -8.0);
    }

    #[test]
    fn test_squared_loss_at_minimum() {
        let loss = SquaredLoss;
        assert_eq!(loss.loss(&3.0, &3.0), 0.0);
        assert_eq!(loss.grad_wrt_prediction(&3.0, &3.0), 0.0);
    }
}
