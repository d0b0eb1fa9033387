//! FILENAME: core/sales-engine/src/engine.rs
//! Aggregation Engine - Turns the dataset and a filter snapshot into chart tables.
//!
//! Algorithm:
//! 1. Filter: keep borrowed references to the records the FilterState accepts
//! 2. Reduce: four independent passes over the filtered view
//!    - genre / platform: group by first occurrence, sum Global_Sales, stable sort descending
//!    - region: one sum per regional column, fixed order
//!    - year: group by year, ascending
//!
//! Every filter change reruns all of it from the full dataset. Sums are plain
//! f64 additions in view order; NaN sales propagate into their group.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Instant;

use dataset::{Dataset, Record};
use rustc_hash::FxHashMap;

use crate::filter::FilterState;
use crate::table::{AggregateRow, AggregateTable, DashboardTables, Dimension, Region};

// ============================================================================
// FILTERED VIEW
// ============================================================================

/// The records that pass the current FilterState. Borrows from the Dataset.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    records: Vec<&'a Record>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Selects the records that match every part of `state`.
pub fn filter<'a>(dataset: &'a Dataset, state: &FilterState) -> FilteredView<'a> {
    if state.genres.is_empty() || state.platforms.is_empty() || state.year_range.is_inverted() {
        return FilteredView::default();
    }

    let records = dataset
        .records()
        .iter()
        .filter(|r| state.accepts(r))
        .collect();

    FilteredView { records }
}

// ============================================================================
// REDUCERS
// ============================================================================

/// Global_Sales per genre, largest first.
pub fn by_genre(view: &FilteredView<'_>) -> AggregateTable<String> {
    sum_by_label(view, Dimension::Genre, |r| r.genre.as_str())
}

/// Global_Sales per platform, largest first.
pub fn by_platform(view: &FilteredView<'_>) -> AggregateTable<String> {
    sum_by_label(view, Dimension::Platform, |r| r.platform.as_str())
}

/// Each regional column summed over the whole view, in `Region::ALL` order.
pub fn by_region(view: &FilteredView<'_>) -> AggregateTable<Region> {
    if view.is_empty() {
        return AggregateTable::empty(Dimension::Region);
    }

    let rows = Region::ALL
        .iter()
        .map(|region| AggregateRow {
            category: *region,
            value: view.iter().fold(0.0, |acc, r| acc + region.sales(r)),
        })
        .collect();

    AggregateTable::from_rows(Dimension::Region, rows)
}

/// Global_Sales per year, ascending by year.
pub fn by_year(view: &FilteredView<'_>) -> AggregateTable<i32> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for record in view.iter() {
        *totals.entry(record.year).or_insert(0.0) += record.global_sales;
    }

    let rows = totals
        .into_iter()
        .map(|(year, value)| AggregateRow { category: year, value })
        .collect();

    AggregateTable::from_rows(Dimension::Year, rows)
}

/// Runs the whole pipeline for one filter snapshot.
pub fn recompute(dataset: &Dataset, state: &FilterState) -> DashboardTables {
    let started = Instant::now();
    let view = filter(dataset, state);

    let tables = DashboardTables {
        filtered_rows: view.len(),
        by_genre: by_genre(&view),
        by_platform: by_platform(&view),
        by_region: by_region(&view),
        by_year: by_year(&view),
    };

    log::debug!(
        target: "ENGINE",
        "recompute: {} of {} records, {} genres, {} platforms, {} years in {:?}",
        tables.filtered_rows,
        dataset.len(),
        tables.by_genre.len(),
        tables.by_platform.len(),
        tables.by_year.len(),
        started.elapsed()
    );

    tables
}

// ============================================================================
// HELPERS
// ============================================================================

/// Groups by a text key in first-occurrence order, then stable-sorts by total descending.
fn sum_by_label<'a>(
    view: &FilteredView<'a>,
    dimension: Dimension,
    key: fn(&'a Record) -> &'a str,
) -> AggregateTable<String> {
    let mut positions: FxHashMap<&'a str, usize> = FxHashMap::default();
    let mut rows: Vec<AggregateRow<String>> = Vec::new();

    for record in view.iter() {
        let label = key(record);
        let idx = *positions.entry(label).or_insert_with(|| {
            rows.push(AggregateRow {
                category: label.to_string(),
                value: 0.0,
            });
            rows.len() - 1
        });
        rows[idx].value += record.global_sales;
    }

    rows.sort_by(|a, b| descending(a.value, b.value));
    AggregateTable::from_rows(dimension, rows)
}

/// Larger totals first; NaN totals after every number.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
