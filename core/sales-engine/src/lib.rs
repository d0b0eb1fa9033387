//! FILENAME: core/sales-engine/src/lib.rs
//! Filter-and-aggregate pipeline for the sales dashboard.
//!
//! Depends on `dataset` for the loaded table only; everything here is a pure
//! function of (Dataset, FilterState).
//!
//! Layers:
//! - `filter`: the user's selection snapshot and the options it is drawn from
//! - `table`: chart-ready (category, value) output
//! - `engine`: filtering and the four reducers

pub mod engine;
pub mod filter;
pub mod table;

pub use engine::{by_genre, by_platform, by_region, by_year, filter, recompute, FilteredView};
pub use filter::{FilterError, FilterOptions, FilterState, YearRange, DEFAULT_YEAR_FLOOR};
pub use table::{AggregateRow, AggregateTable, ChartKind, DashboardTables, Dimension, Region, SALES_AXIS_LABEL};
