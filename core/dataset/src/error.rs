//! FILENAME: core/dataset/src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// The source table could not be read, or does not have the expected shape.
#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XLSX read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Workbook contains no sheets")]
    NoSheets,

    #[error("Source has no header row")]
    EmptySource,

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),
}

/// A retained row violates the schema.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataIntegrityError {
    #[error("Line {line}: Year value {value:?} is not a whole calendar year")]
    InvalidYear { line: u64, value: String },

    #[error("Line {line}: {column} value {value:?} is not a non-negative number")]
    InvalidSales {
        line: u64,
        column: &'static str,
        value: String,
    },
}

/// Everything that can make a dataset load fail. Both kinds are fatal at startup.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error(transparent)]
    Source(#[from] DataSourceError),

    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}

impl DatasetError {
    pub fn is_source(&self) -> bool {
        matches!(self, DatasetError::Source(_))
    }

    pub fn is_integrity(&self) -> bool {
        matches!(self, DatasetError::Integrity(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = DatasetError::from(DataSourceError::MissingColumn("Year"));
        assert!(err.is_source());
        assert_eq!(err.to_string(), "Missing required column: Year");

        let err = DatasetError::from(DataIntegrityError::InvalidYear {
            line: 7,
            value: "2006.5".to_string(),
        });
        assert!(err.is_integrity());
        assert!(err.to_string().contains("Line 7"));
        assert!(err.to_string().contains("2006.5"));
    }
}
