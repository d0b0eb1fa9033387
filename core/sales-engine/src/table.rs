//! FILENAME: core/sales-engine/src/table.rs
//! Aggregate Tables - Chart-ready output for the presentation layer.
//!
//! Every chart slot receives a two-column (category, value) table plus the
//! metadata needed to draw it. Formatting is left to the renderer.

use std::fmt;

use dataset::schema::GLOBAL_SALES;
use dataset::Record;
use serde::{Deserialize, Serialize};

// ============================================================================
// DIMENSIONS
// ============================================================================

/// Axis label for every sales value.
pub const SALES_AXIS_LABEL: &str = "Sales (millions)";

/// How a chart draws its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Line,
}

/// The four fixed chart slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Genre,
    Platform,
    Region,
    Year,
}

impl Dimension {
    pub fn category_column(&self) -> &'static str {
        match self {
            Dimension::Genre => "Genre",
            Dimension::Platform => "Platform",
            Dimension::Region => "Region",
            Dimension::Year => "Year",
        }
    }

    pub fn value_column(&self) -> &'static str {
        match self {
            Dimension::Region => "Sales",
            _ => GLOBAL_SALES,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Dimension::Genre => "Global Sales by Genre",
            Dimension::Platform => "Global Sales by Platform",
            Dimension::Region => "Regional Sales Distribution",
            Dimension::Year => "Global Sales Over Time",
        }
    }

    /// Value-axis label; every chart measures the same unit.
    pub fn value_label(&self) -> &'static str {
        SALES_AXIS_LABEL
    }

    pub fn chart_kind(&self) -> ChartKind {
        match self {
            Dimension::Year => ChartKind::Line,
            _ => ChartKind::Bar,
        }
    }
}

/// Sales geography buckets, in chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    NorthAmerica,
    Europe,
    Japan,
    Other,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::NorthAmerica, Region::Europe, Region::Japan, Region::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Japan => "Japan",
            Region::Other => "Other",
        }
    }

    /// This region's sales column of `record`.
    pub fn sales(&self, record: &Record) -> f64 {
        match self {
            Region::NorthAmerica => record.na_sales,
            Region::Europe => record.eu_sales,
            Region::Japan => record.jp_sales,
            Region::Other => record.other_sales,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// AGGREGATE TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow<K> {
    pub category: K,
    pub value: f64,
}

/// A derived (category, total) table. Zero rows when nothing was aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateTable<K> {
    pub dimension: Dimension,
    rows: Vec<AggregateRow<K>>,
}

impl<K> AggregateTable<K> {
    pub fn empty(dimension: Dimension) -> Self {
        AggregateTable {
            dimension,
            rows: Vec::new(),
        }
    }

    pub(crate) fn from_rows(dimension: Dimension, rows: Vec<AggregateRow<K>>) -> Self {
        AggregateTable { dimension, rows }
    }

    pub fn rows(&self) -> &[AggregateRow<K>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &K> + '_ {
        self.rows.iter().map(|row| &row.category)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.value)
    }

    /// Value for `category`, if it has a row.
    pub fn get<Q>(&self, category: &Q) -> Option<f64>
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.rows
            .iter()
            .find(|row| row.category == *category)
            .map(|row| row.value)
    }

    /// `(category, value)` pairs, mostly for assertions and text output.
    pub fn to_pairs(&self) -> Vec<(K, f64)>
    where
        K: Clone,
    {
        self.rows
            .iter()
            .map(|row| (row.category.clone(), row.value))
            .collect()
    }
}

// ============================================================================
// DASHBOARD TABLES
// ============================================================================

/// The four chart tables for one filter snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardTables {
    /// Row count of the filtered view the tables were built from.
    pub filtered_rows: usize,
    pub by_genre: AggregateTable<String>,
    pub by_platform: AggregateTable<String>,
    pub by_region: AggregateTable<Region>,
    pub by_year: AggregateTable<i32>,
}

impl DashboardTables {
    pub fn empty() -> Self {
        DashboardTables {
            filtered_rows: 0,
            by_genre: AggregateTable::empty(Dimension::Genre),
            by_platform: AggregateTable::empty(Dimension::Platform),
            by_region: AggregateTable::empty(Dimension::Region),
            by_year: AggregateTable::empty(Dimension::Year),
        }
    }

    /// True when the selection matched no records.
    pub fn is_empty(&self) -> bool {
        self.filtered_rows == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_metadata() {
        assert_eq!(Dimension::Region.value_column(), "Sales");
        assert_eq!(Dimension::Genre.value_column(), "Global_Sales");
        assert_eq!(Dimension::Year.chart_kind(), ChartKind::Line);
        assert_eq!(Dimension::Platform.chart_kind(), ChartKind::Bar);
        assert_eq!(Dimension::Region.title(), "Regional Sales Distribution");
        assert_eq!(Dimension::Year.value_label(), "Sales (millions)");
        assert_eq!(Dimension::Genre.value_label(), Dimension::Region.value_label());
    }

    #[test]
    fn test_region_order_and_labels() {
        let labels: Vec<_> = Region::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(labels, ["North America", "Europe", "Japan", "Other"]);
    }

    #[test]
    fn test_table_lookup() {
        let table = AggregateTable::from_rows(
            Dimension::Genre,
            vec![
                AggregateRow { category: "Sports".to_string(), value: 17.0 },
                AggregateRow { category: "Racing".to_string(), value: 3.0 },
            ],
        );
        assert_eq!(table.get("Racing"), Some(3.0));
        assert_eq!(table.get("Puzzle"), None);
        assert_eq!(table.values().sum::<f64>(), 20.0);
        assert!(AggregateTable::<i32>::empty(Dimension::Year).is_empty());
    }
}
