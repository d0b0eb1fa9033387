//! FILENAME: core/dataset/src/lib.rs
//! Video game sales dataset.
//!
//! Reads the sales table (CSV, TSV or XLSX) once, normalizes its cells and
//! keeps the result as an immutable `Dataset` owned by the caller.
//!
//! Layers:
//! - `schema`: column contract and cell coercion rules
//! - `csv_reader` / `xlsx_reader`: container formats
//! - `loader`: format dispatch and the memoized `DatasetLoader`

mod csv_reader;
mod error;
mod loader;
pub mod schema;
mod xlsx_reader;

pub use csv_reader::{read_delimited, read_delimited_from};
pub use error::{DataIntegrityError, DataSourceError, DatasetError};
pub use loader::{load_dataset, DatasetLoader, SourceFormat};
pub use xlsx_reader::read_xlsx;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// RECORD
// ============================================================================

/// One row of the sales table. Sales are in millions of units.
///
/// `global_sales` is taken from the source as-is and is not reconciled
/// against the four regional columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "NA_Sales")]
    pub na_sales: f64,
    #[serde(rename = "EU_Sales")]
    pub eu_sales: f64,
    #[serde(rename = "JP_Sales")]
    pub jp_sales: f64,
    #[serde(rename = "Other_Sales")]
    pub other_sales: f64,
    #[serde(rename = "Global_Sales")]
    pub global_sales: f64,
}

// ============================================================================
// DATASET
// ============================================================================

/// The loaded sales table. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    dropped_rows: usize,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::with_dropped(records, 0)
    }

    pub(crate) fn with_dropped(records: Vec<Record>, dropped_rows: usize) -> Self {
        Dataset {
            records,
            dropped_rows,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Source rows skipped because their Year was missing or not numeric.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// Distinct genres, sorted ascending.
    pub fn distinct_genres(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.genre.as_str()))
    }

    /// Distinct platforms, sorted ascending.
    pub fn distinct_platforms(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.platform.as_str()))
    }

    /// `(min Year, max Year)`, or `None` for an empty dataset.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.records.iter().map(|r| r.year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
