// FILENAME: core\dataset\src\xlsx_reader.rs

use crate::schema::{build_dataset, RawCell};
use crate::{DataSourceError, Dataset, DatasetError};
use calamine::{Data, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads the first worksheet of an XLSX workbook. The first used row is the header.
pub fn read_xlsx(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DataSourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut workbook: Xlsx<_> = Xlsx::new(BufReader::new(file)).map_err(DataSourceError::from)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(DataSourceError::NoSheets)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(DataSourceError::from)?;

    // Range rows start at the first used cell, not necessarily A1.
    let first_line = range.start().map_or(1, |(row, _)| row as u64 + 1);

    let mut rows = range.rows();
    let header = rows.next().ok_or(DataSourceError::EmptySource)?;
    let headers: Vec<String> = header.iter().map(|cell| raw_cell(cell).to_label()).collect();

    let body = rows.enumerate().map(|(idx, row)| {
        let cells: Vec<RawCell> = row.iter().map(raw_cell).collect();
        Ok::<_, DataSourceError>((first_line + 1 + idx as u64, cells))
    });

    build_dataset(&headers, body)
}

fn raw_cell(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::from_text(s),
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Bool(b) => RawCell::Text(b.to_string()),
        // #N/A and friends read as missing, like an empty cell.
        Data::Error(_) => RawCell::Empty,
        Data::DateTime(dt) => RawCell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => RawCell::Text(s.clone()),
        Data::DurationIso(s) => RawCell::Text(s.clone()),
    }
}
