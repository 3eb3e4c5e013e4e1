use crate::model::OffsetLinearParams;

/// Trait for gradient-based optimizers.
///
/// Optimizers are responsible for updating model parameters based on computed
/// gradients. Training logic (`Trainer`) is decoupled from parameter update
/// logic, so any model can be paired with any optimizer over the same
/// parameter type.
pub trait Optimizer<P> {
    /// Performs an optimization step using the update rule:
    /// ```text
    /// params_new = params - learning_rate * gradients
    /// ```
    ///
    /// Does not mutate its inputs; returns new owned parameters.
    fn step(&self, params: &P, gradients: &P) -> P;
}

/// Stochastic Gradient Descent (SGD) optimizer.
///
/// The simplest first-order optimizer:
/// ```text
/// θ ← θ - η · ∇L(θ)
/// ```
/// where `η` is the learning rate. Stateless — no momentum or adaptive
/// learning rates.
#[derive(Clone)]
pub struct SGD {
    lr: f64,
}

impl SGD {
    /// Creates a new SGD optimizer with the specified learning rate.
    pub fn new(lr: f64) -> Self {
        Self { lr }
    }

    /// Returns the current learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.lr
    }
}

impl Optimizer<OffsetLinearParams> for SGD {
    fn step(&self, params: &OffsetLinearParams, grads: &OffsetLinearParams) -> OffsetLinearParams {
        OffsetLinearParams {
            t1: params.t1 - self.lr * grads.t1,
            t2: params.t2 - self.lr * grads.t2,
            t3: params.t3 - self.lr * grads.t3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sgd_step() {
        let sgd = SGD::new(0.0001);
        let params = OffsetLinearParams::new(1.0, 1.0, 1.0);
        let grads = OffsetLinearParams::new(-16.0, -32.0, -8.0);

        let updated = sgd.step(&params, &grads);
        assert!((updated.t1 - 1.0016).abs() < 1e-12);
        assert!((updated.t2 - 1.0032).abs() < 1e-12);
        assert!((updated.t3 - 1.0008).abs() < 1e-12);
    }

    #[test]
    fn test_sgd_zero_gradient_is_identity() {
        let sgd = SGD::new(0.1);
        let params = OffsetLinearParams::new(0.5, -0.5, 2.0);
        let updated = sgd.step(&params, &OffsetLinearParams::new(0.0, 0.0, 0.0));
        assert_eq!(updated, params);
    }

    #[test]
    fn test_learning_rate_accessor() {
        assert_eq!(SGD::new(0.0001).learning_rate(), 0.0001);
    }
}
