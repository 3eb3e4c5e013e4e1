//! Dataset abstractions for online training.
//!
//! This module provides a generic [`Dataset`] trait for uniform access to training
//! records and a [`DatasetRecordIter`] iterator that walks the dataset in order,
//! one record at a time, as required by per-sample gradient descent.
//!
//! # Core Concepts
//!
//! - **Record** — One observation `(x1, x2, y)` where `x1`, `x2` are inputs and
//!   `y` is the target.
//! - **Dataset** — An ordered, immutable source of records. Record order is
//!   significant: it determines the parameter update order.

use std::fmt::Debug;

pub mod file;
pub mod memory;
pub use self::memory::InMemoryDataset;

/// A single training observation: two inputs and one target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

impl Record {
    pub fn new(x1: f64, x2: f64, y: f64) -> Self {
        Self { x1, x2, y }
    }
}

/// Abstract interface for an ordered source of training records.
pub trait Dataset {
    type Error: Debug;

    /// Returns the total number of records (if known).
    fn len(&self) -> Option<usize>;

    /// Checks whether the dataset is empty.
    fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Returns the record at `index`.
    fn get(&self, index: usize) -> Result<Record, Self::Error>;

    /// Creates an iterator over records in dataset order.
    fn records(&self) -> DatasetRecordIter<'_, Self>
    where
        Self: Sized,
    {
        DatasetRecordIter {
            dataset: self,
            current: 0,
        }
    }
}

/// Iterator over dataset records in order.
pub struct DatasetRecordIter<'a, D: ?Sized> {
    dataset: &'a D,
    current: usize,
}

impl<'a, D: Dataset> Iterator for DatasetRecordIter<'a, D> {
    type Item = Result<Record, D::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let total = self.dataset.len()?;
        if self.current >= total {
            return None;
        }

        let index = self.current;
        self.current += 1;

        Some(self.dataset.get(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_iterate_in_order() {
        let dataset = InMemoryDataset::new(vec![
            Record::new(1.0, 2.0, 3.0),
            Record::new(4.0, 5.0, 6.0),
            Record::new(7.0, 8.0, 9.0),
        ]);

        let records: Vec<Record> = dataset.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Record::new(1.0, 2.0, 3.0));
        assert_eq!(records[2], Record::new(7.0, 8.0, 9.0));
    }

    #[test]
    fn test_empty_dataset_yields_nothing() {
        let dataset = InMemoryDataset::new(vec![]);
        assert!(dataset.is_empty());
        assert_eq!(dataset.records().count(), 0);
    }
}
