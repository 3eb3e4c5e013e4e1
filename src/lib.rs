//! # onlinegrad-rs
//!
//! Online (per-record) gradient descent for a small parametric regression
//! model, with strict separation between training and inference phases.
//!
//! The model is `y = t1 * x1 + t2 * (x2 + t3)`: three scalar parameters,
//! initialized from independent standard-normal draws and updated once per
//! record in a single ordered pass over the data.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: Models carry their training state in the type
//!   system (`Unfitted` vs `Fitted`), preventing invalid operations at
//!   compile time.
//! - **Training/Inference Separation**: Trained models contain only the
//!   learned parameters; training logic lives in separate components
//!   (losses, optimizers, trainers).
//! - **Injectable Randomness**: Parameter initialization takes a
//!   `rand::Rng`, so seeded runs are bit-for-bit reproducible.
//! - **Injectable Reporting**: Progress goes through a `ProgressSink`, so
//!   the reporting cadence is observable in tests and replaceable when
//!   embedding.
//!
//! ## Quick Start
//!
//! ```rust
//! use onlinegrad_rs::dataset::InMemoryDataset;
//! use onlinegrad_rs::loss::SquaredLoss;
//! use onlinegrad_rs::model::{InferenceModel, OffsetLinearModel};
//! use onlinegrad_rs::optimizer::SGD;
//! use onlinegrad_rs::trainer::{MemorySink, Trainer};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let dataset = InMemoryDataset::from_triples(vec![
//!     (1.0, 2.0, 5.0),
//!     (2.0, 1.0, 4.0),
//! ]);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let model = OffsetLinearModel::random_init(&mut rng);
//!
//! let trainer = Trainer::builder(SquaredLoss, SGD::new(0.0001))
//!     .report_every(10)
//!     .build();
//!
//! let mut sink = MemorySink::new();
//! let fitted = trainer.fit(model, &dataset, &mut sink).unwrap();
//! let prediction = fitted.predict(&(1.0, 2.0));
//! ```

pub mod dataset;
pub mod error;
pub mod loss;
pub mod model;
pub mod optimizer;
pub mod trainer;

pub use dataset::{Dataset, InMemoryDataset, Record};
pub use error::{DataError, TrainError};
pub use loss::SquaredLoss;
pub use model::{Fitted, InferenceModel, OffsetLinearModel, OffsetLinearParams, Unfitted};
pub use optimizer::SGD;
pub use trainer::{ConsoleSink, MemorySink, Trainer};
