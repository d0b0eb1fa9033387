//! FILENAME: app/dashboard/src/commands.rs
// PURPOSE: Handlers the filter widgets call. Each one builds a new FilterState,
// validates it against the widget options and recomputes all four tables.

use sales_engine::{DashboardTables, FilterOptions, FilterState, YearRange};

use crate::state::DashboardState;
use crate::AppError;

/// Option lists for the genre/platform selects and the year slider bounds.
pub fn get_filter_options(state: &DashboardState) -> &FilterOptions {
    state.options()
}

/// The current selection snapshot.
pub fn get_filter_state(state: &DashboardState) -> &FilterState {
    state.filter()
}

/// Replaces the whole selection at once.
pub fn apply_filter(
    state: &mut DashboardState,
    next: FilterState,
) -> Result<&DashboardTables, AppError> {
    log::debug!(target: "CMD", "ENTER apply_filter {:?}", next);
    let tables = state.apply(next)?;
    log::debug!(target: "CMD", "EXIT apply_filter rows={}", tables.filtered_rows);
    Ok(tables)
}

/// Genre multi-select changed.
pub fn set_genres(
    state: &mut DashboardState,
    genres: Vec<String>,
) -> Result<&DashboardTables, AppError> {
    log::debug!(target: "CMD", "ENTER set_genres count={}", genres.len());
    let next = state.filter().with_genres(genres);
    let tables = state.apply(next)?;
    log::debug!(target: "CMD", "EXIT set_genres rows={}", tables.filtered_rows);
    Ok(tables)
}

/// Platform multi-select changed.
pub fn set_platforms(
    state: &mut DashboardState,
    platforms: Vec<String>,
) -> Result<&DashboardTables, AppError> {
    log::debug!(target: "CMD", "ENTER set_platforms count={}", platforms.len());
    let next = state.filter().with_platforms(platforms);
    let tables = state.apply(next)?;
    log::debug!(target: "CMD", "EXIT set_platforms rows={}", tables.filtered_rows);
    Ok(tables)
}

/// Year slider moved.
pub fn set_year_range(
    state: &mut DashboardState,
    min: i32,
    max: i32,
) -> Result<&DashboardTables, AppError> {
    log::debug!(target: "CMD", "ENTER set_year_range {}..={}", min, max);
    let next = state.filter().with_year_range(YearRange::new(min, max));
    let tables = state.apply(next)?;
    log::debug!(target: "CMD", "EXIT set_year_range rows={}", tables.filtered_rows);
    Ok(tables)
}

/// Back to the startup selection.
pub fn reset_filters(state: &mut DashboardState) -> Result<&DashboardTables, AppError> {
    log::debug!(target: "CMD", "ENTER reset_filters");
    let next = state.options().default_state();
    let tables = state.apply(next)?;
    log::debug!(target: "CMD", "EXIT reset_filters rows={}", tables.filtered_rows);
    Ok(tables)
}
