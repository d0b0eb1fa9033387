// FILENAME: core\dataset\src\csv_reader.rs

use crate::schema::{build_dataset, RawCell};
use crate::{DataSourceError, Dataset, DatasetError};
use csv::StringRecord;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads a delimited text file (comma for CSV, tab for TSV).
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_delimited_from(BufReader::new(file), delimiter)
}

/// Same as `read_delimited`, for any byte stream.
pub fn read_delimited_from<R: Read>(reader: R, delimiter: u8) -> Result<Dataset, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        // The header is read by hand so a missing one is reported as EmptySource.
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = csv_reader.records();

    let header = match rows.next() {
        Some(header) => header.map_err(DataSourceError::from)?,
        None => return Err(DataSourceError::EmptySource.into()),
    };
    let headers: Vec<String> = header.iter().map(str::to_string).collect();

    let body = rows.map(
        |row: csv::Result<StringRecord>| -> Result<(u64, Vec<RawCell>), DataSourceError> {
            let row = row?;
            let line = row.position().map_or(0, |pos| pos.line());
            Ok((line, row.iter().map(RawCell::from_text).collect()))
        },
    );

    build_dataset(&headers, body)
}
