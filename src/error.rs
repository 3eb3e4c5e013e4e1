//! Error types for dataset loading and training.

use std::fmt;

/// Error type for dataset loading and access.
#[derive(Debug)]
pub enum DataError {
    /// I/O error while opening or reading the input file.
    Io(String),
    /// A row could not be parsed into three numeric values.
    /// `line` is 1-indexed.
    Parse { line: usize, message: String },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(msg) => {
                write!(f, "I/O error: {}", msg)
            }
            DataError::Parse { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(io_err) => DataError::Io(io_err.to_string()),
            _ => DataError::Parse {
                line: err
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(0),
                message: err.to_string(),
            },
        }
    }
}

/// Error type for a training run.
#[derive(Debug)]
pub enum TrainError {
    /// The dataset failed while yielding a record.
    Dataset(String),
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainError::Dataset(msg) => {
                write!(f, "Dataset error: {}", msg)
            }
        }
    }
}

impl std::error::Error for TrainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_io() {
        let err = DataError::Io("file not found".to_string());
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_display_parse() {
        let err = DataError::Parse {
            line: 3,
            message: "expected 3 columns, got 2".to_string(),
        };
        let s = err.to_string();
        assert!(s.contains("line 3"));
        assert!(s.contains("expected 3 columns"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: DataError = io_err.into();
        assert!(matches!(err, DataError::Io(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = DataError::Io("test".to_string());
        let _: &dyn std::error::Error = &err;
        let err = TrainError::Dataset("test".to_string());
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_train_error_display() {
        let err = TrainError::Dataset("record 5 unavailable".to_string());
        assert!(err.to_string().contains("Dataset error"));
    }
}
