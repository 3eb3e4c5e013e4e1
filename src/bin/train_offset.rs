//! Fits the offset-linear model to a space-delimited three-column file
//! with one online gradient-descent pass.
//!
//! Usage: `train_offset [input_path]` (default: `data.csv`).

use onlinegrad_rs::dataset::file::load_records;
use onlinegrad_rs::loss::SquaredLoss;
use onlinegrad_rs::model::OffsetLinearModel;
use onlinegrad_rs::optimizer::SGD;
use onlinegrad_rs::trainer::{ConsoleSink, Trainer};

const LEARNING_RATE: f64 = 0.0001;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data.csv".to_string());

    let dataset = match load_records(&path) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Failed to load {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let model = OffsetLinearModel::random_init(&mut rand::thread_rng());
    let trainer = Trainer::builder(SquaredLoss, SGD::new(LEARNING_RATE)).build();

    let mut sink = ConsoleSink;
    match trainer.fit(model, &dataset, &mut sink) {
        Ok(fitted) => {
            let p = fitted.params();
            println!("Final parameters {} {} {}", p.t1, p.t2, p.t3);
        }
        Err(e) => {
            eprintln!("Training failed: {}", e);
            std::process::exit(1);
        }
    }
}
