use crate::dataset::{Dataset, Record};

/// Dataset held entirely in memory as an ordered vector of records.
///
/// An empty dataset is valid: it yields no records and a training pass
/// over it performs no updates.
#[derive(Debug)]
pub struct InMemoryDataset {
    records: Vec<Record>,
}

impl InMemoryDataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Builds a dataset from parallel `(x1, x2, y)` triples.
    pub fn from_triples(triples: Vec<(f64, f64, f64)>) -> Self {
        let records = triples
            .into_iter()
            .map(|(x1, x2, y)| Record::new(x1, x2, y))
            .collect();
        Self { records }
    }
}

impl Dataset for InMemoryDataset {
    type Error = std::convert::Infallible;

    fn len(&self) -> Option<usize> {
        Some(self.records.len())
    }

    fn get(&self, index: usize) -> Result<Record, Self::Error> {
        Ok(self.records[index])
    }
}
