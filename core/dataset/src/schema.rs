//! FILENAME: core/dataset/src/schema.rs
//! PURPOSE: Column contract of the sales table and per-cell normalization.
//! CONTEXT: Both readers reduce their input to a header plus rows of `RawCell`
//! and hand them to `build_dataset`, so coercion rules live in one place.

use crate::error::{DataIntegrityError, DataSourceError, DatasetError};
use crate::{Dataset, Record};

// ============================================================================
// COLUMN NAMES
// ============================================================================

pub const GENRE: &str = "Genre";
pub const PLATFORM: &str = "Platform";
pub const YEAR: &str = "Year";
pub const NA_SALES: &str = "NA_Sales";
pub const EU_SALES: &str = "EU_Sales";
pub const JP_SALES: &str = "JP_Sales";
pub const OTHER_SALES: &str = "Other_Sales";
pub const GLOBAL_SALES: &str = "Global_Sales";

/// Required columns, in the order they are checked.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    YEAR,
    GENRE,
    PLATFORM,
    NA_SALES,
    EU_SALES,
    JP_SALES,
    OTHER_SALES,
    GLOBAL_SALES,
];

/// Cell contents that read as "no value" (the usual CSV null spellings).
const MISSING_MARKERS: &[&str] = &[
    "", "N/A", "NA", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A", "<NA>",
];

const MIN_YEAR: f64 = 1.0;
const MAX_YEAR: f64 = 9999.0;

// ============================================================================
// RAW CELLS
// ============================================================================

/// A cell as it comes out of a reader, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RawCell {
    Empty,
    Number(f64),
    Text(String),
}

impl RawCell {
    pub(crate) fn from_text(text: &str) -> Self {
        if text.is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(text.to_string())
        }
    }

    fn is_missing(&self) -> bool {
        match self {
            RawCell::Empty => true,
            RawCell::Number(_) => false,
            RawCell::Text(s) => MISSING_MARKERS.contains(&s.trim()),
        }
    }

    /// Text rendering used for labels and error messages.
    pub(crate) fn to_label(&self) -> String {
        match self {
            RawCell::Empty => String::new(),
            RawCell::Text(s) => s.clone(),
            RawCell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            RawCell::Number(n) => n.to_string(),
        }
    }
}

// ============================================================================
// COERCION
// ============================================================================

/// Year cell -> `Ok(None)` when the row should be dropped.
pub(crate) fn coerce_year(cell: &RawCell, line: u64) -> Result<Option<i32>, DataIntegrityError> {
    if cell.is_missing() {
        return Ok(None);
    }

    let value = match cell {
        RawCell::Number(n) => *n,
        RawCell::Text(s) => match s.trim().parse::<f64>() {
            Ok(n) => n,
            Err(_) => return Ok(None),
        },
        RawCell::Empty => return Ok(None),
    };

    if !value.is_finite() || value.fract() != 0.0 || !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        return Err(DataIntegrityError::InvalidYear {
            line,
            value: cell.to_label(),
        });
    }

    Ok(Some(value as i32))
}

/// Sales cell -> millions of units. Missing cells load as NaN.
pub(crate) fn coerce_sales(
    cell: &RawCell,
    column: &'static str,
    line: u64,
) -> Result<f64, DataIntegrityError> {
    if cell.is_missing() {
        return Ok(f64::NAN);
    }

    let invalid = || DataIntegrityError::InvalidSales {
        line,
        column,
        value: cell.to_label(),
    };

    let value = match cell {
        RawCell::Number(n) => *n,
        RawCell::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid())?,
        RawCell::Empty => return Ok(f64::NAN),
    };

    if value.is_infinite() || value < 0.0 {
        return Err(invalid());
    }

    Ok(value)
}

// ============================================================================
// COLUMN MAP
// ============================================================================

/// Positions of the required columns within a source header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMap {
    genre: usize,
    platform: usize,
    year: usize,
    na_sales: usize,
    eu_sales: usize,
    jp_sales: usize,
    other_sales: usize,
    global_sales: usize,
}

impl ColumnMap {
    pub(crate) fn resolve(headers: &[String]) -> Result<Self, DataSourceError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
                .ok_or(DataSourceError::MissingColumn(name))
        };

        // Checked in REQUIRED_COLUMNS order so the first missing one is reported.
        let year = position(YEAR)?;
        let genre = position(GENRE)?;
        let platform = position(PLATFORM)?;
        let na_sales = position(NA_SALES)?;
        let eu_sales = position(EU_SALES)?;
        let jp_sales = position(JP_SALES)?;
        let other_sales = position(OTHER_SALES)?;
        let global_sales = position(GLOBAL_SALES)?;

        Ok(ColumnMap {
            genre,
            platform,
            year,
            na_sales,
            eu_sales,
            jp_sales,
            other_sales,
            global_sales,
        })
    }

    /// Normalizes one source row. `Ok(None)` means the row has no usable Year.
    pub(crate) fn build_record(
        &self,
        cells: &[RawCell],
        line: u64,
    ) -> Result<Option<Record>, DataIntegrityError> {
        let cell = |idx: usize| cell_at(cells, idx);

        let year = match coerce_year(cell(self.year), line)? {
            Some(year) => year,
            None => return Ok(None),
        };

        Ok(Some(Record {
            genre: cell(self.genre).to_label(),
            platform: cell(self.platform).to_label(),
            year,
            na_sales: coerce_sales(cell(self.na_sales), NA_SALES, line)?,
            eu_sales: coerce_sales(cell(self.eu_sales), EU_SALES, line)?,
            jp_sales: coerce_sales(cell(self.jp_sales), JP_SALES, line)?,
            other_sales: coerce_sales(cell(self.other_sales), OTHER_SALES, line)?,
            global_sales: coerce_sales(cell(self.global_sales), GLOBAL_SALES, line)?,
        }))
    }
}

static EMPTY_CELL: RawCell = RawCell::Empty;

/// Flexible readers can yield rows shorter than the header.
fn cell_at(cells: &[RawCell], idx: usize) -> &RawCell {
    cells.get(idx).unwrap_or(&EMPTY_CELL)
}

/// Assembles a Dataset from a header and `(source line, cells)` rows.
pub(crate) fn build_dataset<I>(headers: &[String], rows: I) -> Result<Dataset, DatasetError>
where
    I: IntoIterator<Item = Result<(u64, Vec<RawCell>), DataSourceError>>,
{
    let columns = ColumnMap::resolve(headers)?;

    let mut records = Vec::new();
    let mut dropped_rows = 0;

    for row in rows {
        let (line, cells) = row?;
        match columns.build_record(&cells, line)? {
            Some(record) => records.push(record),
            None => dropped_rows += 1,
        }
    }

    if dropped_rows > 0 {
        log::debug!(target: "DATA", "dropped {} rows without a usable Year", dropped_rows);
    }

    Ok(Dataset::with_dropped(records, dropped_rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> RawCell {
        RawCell::from_text(s)
    }

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_year_coercion() {
        assert_eq!(coerce_year(&text("2006"), 2), Ok(Some(2006)));
        assert_eq!(coerce_year(&text("2006.0"), 2), Ok(Some(2006)));
        assert_eq!(coerce_year(&RawCell::Number(1985.0), 2), Ok(Some(1985)));
        assert_eq!(coerce_year(&text(" 1999 "), 2), Ok(Some(1999)));
    }

    #[test]
    fn test_missing_or_text_year_drops_row() {
        for raw in ["", "N/A", "NaN", "nan", "null", "unknown"] {
            assert_eq!(coerce_year(&text(raw), 3), Ok(None), "year {:?}", raw);
        }
        assert_eq!(coerce_year(&RawCell::Empty, 3), Ok(None));
    }

    #[test]
    fn test_non_integral_year_is_integrity_error() {
        let err = coerce_year(&text("2006.5"), 4).unwrap_err();
        assert_eq!(
            err,
            DataIntegrityError::InvalidYear {
                line: 4,
                value: "2006.5".to_string()
            }
        );
        assert!(coerce_year(&text("inf"), 4).is_err());
        assert!(coerce_year(&RawCell::Number(-3.0), 4).is_err());
        assert!(coerce_year(&RawCell::Number(20_000.0), 4).is_err());
    }

    #[test]
    fn test_sales_coercion() {
        assert_eq!(coerce_sales(&text("41.49"), NA_SALES, 2), Ok(41.49));
        assert_eq!(coerce_sales(&RawCell::Number(0.0), NA_SALES, 2), Ok(0.0));
        assert!(coerce_sales(&text(""), NA_SALES, 2).unwrap().is_nan());
        assert!(coerce_sales(&text("N/A"), NA_SALES, 2).unwrap().is_nan());
    }

    #[test]
    fn test_bad_sales_is_integrity_error() {
        assert!(matches!(
            coerce_sales(&text("lots"), EU_SALES, 9),
            Err(DataIntegrityError::InvalidSales { line: 9, column: "EU_Sales", .. })
        ));
        assert!(coerce_sales(&text("-1.5"), EU_SALES, 9).is_err());
        assert!(coerce_sales(&RawCell::Number(f64::INFINITY), EU_SALES, 9).is_err());
    }

    #[test]
    fn test_resolve_ignores_order_and_extra_columns() {
        let map = ColumnMap::resolve(&headers(&[
            "Rank", "Name", "Platform", "Year", "Genre", "Publisher", "NA_Sales", "EU_Sales",
            "JP_Sales", "Other_Sales", "Global_Sales",
        ]))
        .unwrap();
        assert_eq!(map.platform, 2);
        assert_eq!(map.year, 3);
        assert_eq!(map.genre, 4);
        assert_eq!(map.global_sales, 10);
    }

    #[test]
    fn test_resolve_reports_first_missing_column() {
        let err = ColumnMap::resolve(&headers(&["Genre", "Platform", "NA_Sales"])).unwrap_err();
        assert!(matches!(err, DataSourceError::MissingColumn("Year")));

        let err = ColumnMap::resolve(&headers(&[
            "Year", "Genre", "Platform", "NA_Sales", "EU_Sales", "JP_Sales", "Other_Sales",
        ]))
        .unwrap_err();
        assert!(matches!(err, DataSourceError::MissingColumn("Global_Sales")));
    }

    #[test]
    fn test_resolve_strips_bom_and_padding() {
        let map = ColumnMap::resolve(&headers(&[
            "\u{feff}Year", " Genre ", "Platform", "NA_Sales", "EU_Sales", "JP_Sales",
            "Other_Sales", "Global_Sales",
        ]))
        .unwrap();
        assert_eq!(map.year, 0);
        assert_eq!(map.genre, 1);
    }

    #[test]
    fn test_short_row_fills_missing_sales_with_nan() {
        let map = ColumnMap::resolve(&headers(&REQUIRED_COLUMNS)).unwrap();
        let record = map
            .build_record(&[text("2001"), text("Puzzle"), text("GB")], 5)
            .unwrap()
            .unwrap();
        assert_eq!(record.year, 2001);
        assert_eq!(record.genre, "Puzzle");
        assert!(record.global_sales.is_nan());
    }

    #[test]
    fn test_numeric_platform_label() {
        assert_eq!(RawCell::Number(2600.0).to_label(), "2600");
        assert_eq!(RawCell::Number(1.25).to_label(), "1.25");
    }
}
