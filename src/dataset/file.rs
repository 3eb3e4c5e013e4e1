//! Loading records from a space-delimited text file.

use csv::ReaderBuilder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::dataset::{InMemoryDataset, Record};
use crate::error::DataError;

/// Loads a space-delimited text file with no header and exactly three
/// numeric columns per row into an [`InMemoryDataset`].
///
/// Runs of spaces are tolerated (empty fields are skipped); a row with
/// any other column count, or with a non-numeric token, fails the whole
/// load with [`DataError::Parse`] carrying the 1-indexed line number.
///
/// # Example
///
/// ```no_run
/// use onlinegrad_rs::dataset::file::load_records;
///
/// let dataset = load_records("data.csv").unwrap();
/// ```
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<InMemoryDataset, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut rdr = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(records.len() + 1);

        // Consecutive delimiters produce empty fields; skip them so that
        // runs of spaces still parse as three columns.
        let fields: Vec<&str> = row.iter().filter(|f| !f.trim().is_empty()).collect();
        if fields.len() != 3 {
            return Err(DataError::Parse {
                line,
                message: format!("expected 3 columns, got {}", fields.len()),
            });
        }

        let x1 = parse_field(fields[0], line)?;
        let x2 = parse_field(fields[1], line)?;
        let y = parse_field(fields[2], line)?;
        records.push(Record::new(x1, x2, y));
    }

    Ok(InMemoryDataset::new(records))
}

fn parse_field(field: &str, line: usize) -> Result<f64, DataError> {
    field.trim().parse::<f64>().map_err(|_| DataError::Parse {
        line,
        message: format!("invalid numeric value '{}'", field),
    })
}
