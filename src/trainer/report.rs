//! Progress reporting for training runs.

use crate::model::OffsetLinearParams;

/// Receives training progress events.
///
/// The trainer emits one `startup` event before the first update and one
/// `progress` event per reporting interval. Injecting the sink keeps the
/// training loop free of hardwired output and makes the reporting cadence
/// testable.
pub trait ProgressSink<P> {
    /// Called once with the initial parameters, before any update.
    fn startup(&mut self, params: &P);

    /// Called after the update for the `iteration`-th record (1-indexed)
    /// when the reporting interval divides `iteration`. `loss` is the loss
    /// of that record computed before its update; `params` are the values
    /// after it.
    fn progress(&mut self, iteration: usize, loss: f64, params: &P);
}

/// Prints progress to stdout.
pub struct ConsoleSink;

impl ProgressSink<OffsetLinearParams> for ConsoleSink {
    fn startup(&mut self, params: &OffsetLinearParams) {
        println!("Parameters start at {} {} {}", params.t1, params.t2, params.t3);
    }

    fn progress(&mut self, iteration: usize, loss: f64, params: &OffsetLinearParams) {
        println!(
            "Iteration {} - loss is {} - parameters are {} {} {}",
            iteration, loss, params.t1, params.t2, params.t3
        );
    }
}

/// A progress event captured by [`MemorySink`].
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressEntry<P> {
    pub iteration: usize,
    pub loss: f64,
    pub params: P,
}

/// Collects progress events in memory, for tests and embedding.
pub struct MemorySink<P> {
    pub initial_params: Option<P>,
    pub entries: Vec<ProgressEntry<P>>,
}

impl<P> MemorySink<P> {
    pub fn new() -> Self {
        Self {
            initial_params: None,
            entries: Vec::new(),
        }
    }
}

impl<P> Default for MemorySink<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Clone> ProgressSink<P> for MemorySink<P> {
    fn startup(&mut self, params: &P) {
        self.initial_params = Some(params.clone());
    }

    fn progress(&mut self, iteration: usize, loss: f64, params: &P) {
        self.entries.push(ProgressEntry {
            iteration,
            loss,
            params: params.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_events() {
        let mut sink = MemorySink::new();
        let start = OffsetLinearParams::new(0.0, 0.0, 0.0);
        let after = OffsetLinearParams::new(0.1, 0.2, 0.3);

        sink.startup(&start);
        sink.progress(10, 16.0, &after);

        assert_eq!(sink.initial_params, Some(start));
        assert_eq!(sink.entries.len(), 1);
        assert_eq!(sink.entries[0].iteration, 10);
        assert_eq!(sink.entries[0].loss, 16.0);
        assert_eq!(sink.entries[0].params, after);
    }
}
