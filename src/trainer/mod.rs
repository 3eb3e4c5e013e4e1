// trainer/mod.rs
use crate::{
    dataset::{Dataset, Record},
    error::TrainError,
    loss::Loss,
    model::TrainableModel,
    optimizer::Optimizer,
};
use std::marker::PhantomData;

pub mod report;
pub use report::{ConsoleSink, MemorySink, ProgressEntry, ProgressSink};

/// Orchestrates a single online training pass over a dataset.
///
/// Combines a loss function and an optimizer to fit a model, one gradient
/// step per record in dataset order. No shuffling, no batching, no epochs.
/// Once built via `TrainerBuilder`, it is immutable and can be reused across
/// multiple models (as long as types match).
pub struct Trainer<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    pub(crate) report_every: usize,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    _phantom_model: PhantomData<M>,
}

/// Fluent builder for constructing a `Trainer`.
///
/// Defaults:
/// - `report_every`: 10
pub struct TrainerBuilder<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    report_every: usize,
    loss_fn: L,
    optimizer: O,
    _phantom_model: PhantomData<M>,
}

impl<L, O, M, P> TrainerBuilder<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    /// Creates a new `TrainerBuilder` with the given components.
    ///
    /// # Arguments
    /// * `loss_fn` — differentiable loss (e.g., `SquaredLoss`)
    /// * `optimizer` — parameter updater (e.g., `SGD`)
    pub fn new(loss_fn: L, optimizer: O) -> Self {
        Self {
            report_every: 10,
            loss_fn,
            optimizer,
            _phantom_model: PhantomData,
        }
    }

    /// Sets how many records are processed between progress reports.
    /// An interval of 0 disables reporting.
    pub fn report_every(mut self, interval: usize) -> Self {
        self.report_every = interval;
        self
    }

    pub fn build(self) -> Trainer<L, O, M, P> {
        Trainer {
            report_every: self.report_every,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            _phantom_model: PhantomData,
        }
    }
}

impl<L, O, M, P> Trainer<L, O, M, P>
where
    L: Loss<Prediction = f64, Target = f64>,
    M: TrainableModel<Input = Record, Prediction = f64, Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    /// Fits the model with one pass of per-record gradient updates.
    ///
    /// Emits a `startup` event with the initial parameters, then for each
    /// record (in dataset order): forward pass, loss, gradient, optimizer
    /// step. Every `report_every`-th record (1-indexed) a `progress` event
    /// carries the record's pre-update loss and the post-update parameters.
    ///
    /// An empty dataset is valid: the startup event is still emitted,
    /// no updates happen, and the model is returned with its initial
    /// parameters.
    pub fn fit<D, S>(&self, mut model: M, dataset: &D, sink: &mut S) -> Result<M::Output, TrainError>
    where
        D: Dataset,
        S: ProgressSink<P>,
    {
        sink.startup(model.params());

        let mut processed = 0usize;
        for record in dataset.records() {
            let record = record.map_err(|e| TrainError::Dataset(format!("{:?}", e)))?;

            let pred = model.forward(&record);
            let loss = self.loss_fn.loss(&pred, &record.y);
            let grad_pred = self.loss_fn.grad_wrt_prediction(&pred, &record.y);
            let grads = model.backward(&record, &grad_pred);
            let new_params = self.optimizer.step(model.params(), &grads);
            model.update_params(&new_params);

            processed += 1;
            if self.report_every != 0 && processed % self.report_every == 0 {
                sink.progress(processed, loss, model.params());
            }
        }

        Ok(model.into_fitted())
    }
}

impl<L, O, M, P> Trainer<L, O, M, P>
where
    L: Loss,
    M: TrainableModel<Params = P, Gradients = P>,
    O: Optimizer<P>,
{
    pub fn builder(loss_fn: L, optimizer: O) -> TrainerBuilder<L, O, M, P> {
        TrainerBuilder::new(loss_fn, optimizer)
    }
}
