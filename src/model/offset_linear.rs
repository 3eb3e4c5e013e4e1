//! Linear model with a learned additive offset on the second input.
//!
//! The model computes `y = t1 * x1 + t2 * (x2 + t3)`: two slopes and an
//! offset `t3` that is learned inside the second term rather than added to
//! the output.

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::path::Path;

use crate::dataset::Record;
use crate::model::{Fitted, InferenceModel, TrainableModel, Unfitted};

/// The three scalar parameters of the offset-linear model.
///
/// Also serves as the gradient type: each field of a gradient value holds
/// the partial derivative of the loss w.r.t. the matching parameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OffsetLinearParams {
    pub t1: f64,
    pub t2: f64,
    pub t3: f64,
}

impl OffsetLinearParams {
    pub fn new(t1: f64, t2: f64, t3: f64) -> Self {
        Self { t1, t2, t3 }
    }

    /// Draws each parameter independently from the standard normal
    /// distribution (mean 0, variance 1).
    ///
    /// The generator is injected so callers can seed it for reproducible
    /// runs:
    ///
    /// ```
    /// use onlinegrad_rs::model::OffsetLinearParams;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let a = OffsetLinearParams::random(&mut rng);
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let b = OffsetLinearParams::random(&mut rng);
    /// assert_eq!(a, b);
    /// ```
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            t1: rng.sample(StandardNormal),
            t2: rng.sample(StandardNormal),
            t3: rng.sample(StandardNormal),
        }
    }
}

pub struct OffsetLinearModel<S> {
    params: OffsetLinearParams,
    _state: PhantomData<S>,
}

impl OffsetLinearModel<Unfitted> {
    /// Creates an untrained model with parameters drawn from the standard
    /// normal distribution.
    pub fn random_init<R: Rng>(rng: &mut R) -> Self {
        Self::from_params(OffsetLinearParams::random(rng))
    }

    /// Creates an untrained model with the given parameters.
    pub fn from_params(params: OffsetLinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }
}

fn evaluate(params: &OffsetLinearParams, x1: f64, x2: f64) -> f64 {
    params.t1 * x1 + params.t2 * (x2 + params.t3)
}

impl TrainableModel for OffsetLinearModel<Unfitted> {
    type Input = Record;
    type Prediction = f64;
    type Params = OffsetLinearParams;
    type Gradients = OffsetLinearParams;
    type Output = OffsetLinearModel<Fitted>;

    fn forward(&self, record: &Record) -> f64 {
        evaluate(&self.params, record.x1, record.x2)
    }

    /// Parameter gradients for `grad_output = dL/d_pred`:
    ///
    /// ```text
    /// dL/dt1 = grad_output * x1
    /// dL/dt2 = grad_output * (x2 + t3)
    /// dL/dt3 = grad_output * t2
    /// ```
    fn backward(&self, record: &Record, grad_output: &f64) -> OffsetLinearParams {
        OffsetLinearParams {
            t1: grad_output * record.x1,
            t2: grad_output * (record.x2 + self.params.t3),
            t3: grad_output * self.params.t2,
        }
    }

    fn params(&self) -> &OffsetLinearParams {
        &self.params
    }

    fn update_params(&mut self, new_params: &OffsetLinearParams) {
        self.params = *new_params;
    }

    fn into_fitted(self) -> OffsetLinearModel<Fitted> {
        OffsetLinearModel {
            params: self.params,
            _state: PhantomData,
        }
    }
}

impl OffsetLinearModel<Fitted> {
    /// Creates a fitted model directly from params (e.g., loaded from disk).
    pub fn new(params: OffsetLinearParams) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    pub fn params(&self) -> &OffsetLinearParams {
        &self.params
    }

    /// Serializes the learned parameters to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let bytes = bincode::serialize(&self.params)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Loads a fitted model from parameters serialized by [`Self::save_to_file`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let bytes = std::fs::read(path)?;
        let params: OffsetLinearParams = bincode::deserialize(&bytes)?;
        Ok(Self::new(params))
    }
}

impl InferenceModel for OffsetLinearModel<Fitted> {
    type Input = (f64, f64);
    type Output = f64;

    fn predict(&self, &(x1, x2): &(f64, f64)) -> f64 {
        evaluate(&self.params, x1, x2)
    }

    fn predict_batch(&self, inputs: &[(f64, f64)]) -> Vec<f64> {
        inputs.iter().map(|input| self.predict(input)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_forward_formula() {
        let model = OffsetLinearModel::from_params(OffsetLinearParams::new(1.0, 1.0, 1.0));
        let record = Record::new(2.0, 3.0, 10.0);
        // 1*2 + 1*(3 + 1) = 6
        assert_eq!(model.forward(&record), 6.0);
    }

    #[test]
    fn test_backward_gradients() {
        let model = OffsetLinearModel::from_params(OffsetLinearParams::new(1.0, 1.0, 1.0));
        let record = Record::new(2.0, 3.0, 10.0);
        // grad_output = 2*(pred - y) = 2*(6 - 10) = -8
        let grads = model.backward(&record, &-8.0);
        assert_eq!(grads.t1, -16.0);
        assert_eq!(grads.t2, -32.0);
        assert_eq!(grads.t3, -8.0);
    }

    #[test]
    fn test_random_init_is_reproducible() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = OffsetLinearModel::random_init(&mut rng);
        let mut rng = StdRng::seed_from_u64(7);
        let b = OffsetLinearModel::random_init(&mut rng);
        assert_eq!(a.params(), b.params());
    }

    #[test]
    fn test_predict_matches_forward() {
        let params = OffsetLinearParams::new(0.5, -1.5, 2.0);
        let unfitted = OffsetLinearModel::from_params(params);
        let pred_forward = unfitted.forward(&Record::new(3.0, 4.0, 0.0));
        let fitted = unfitted.into_fitted();
        assert_eq!(fitted.predict(&(3.0, 4.0)), pred_forward);
    }

    #[test]
    fn test_predict_batch() {
        let fitted = OffsetLinearModel::new(OffsetLinearParams::new(1.0, 2.0, 0.0));
        let preds = fitted.predict_batch(&[(1.0, 1.0), (2.0, 0.5)]);
        assert_eq!(preds, vec![3.0, 3.0]);
    }

    #[test]
    fn test_save_load_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let model = OffsetLinearModel::new(OffsetLinearParams::new(1.0, 2.0, 3.0));

        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("model.bin");
        model.save_to_file(&path)?;

        let loaded = OffsetLinearModel::load_from_file(&path)?;
        assert_eq!(loaded.params(), model.params());

        Ok(())
    }
}
