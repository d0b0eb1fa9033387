//! FILENAME: app/dashboard/src/state.rs
// PURPOSE: Everything the running dashboard holds: the dataset, the widget
// options, the current filter snapshot and the tables computed from it.
// CONTEXT: Single-threaded. Mutation goes through `&mut self`; no locks.

use dataset::{Dataset, DatasetLoader};
use sales_engine::{recompute, DashboardTables, FilterOptions, FilterState};

use crate::config::DashboardConfig;
use crate::AppError;

#[derive(Debug)]
pub struct DashboardState {
    dataset: Dataset,
    options: FilterOptions,
    filter: FilterState,
    tables: DashboardTables,
}

impl DashboardState {
    /// Builds the startup state: default selection, tables computed.
    pub fn new(dataset: Dataset) -> Self {
        let options = FilterOptions::from_dataset(&dataset);
        let filter = options.default_state();
        let tables = recompute(&dataset, &filter);

        log::info!(
            target: "SYS",
            "dashboard ready: {} genres, {} platforms, years {:?}, default range {}..={}",
            options.genres.len(),
            options.platforms.len(),
            options.year_bounds.map(|b| (b.min, b.max)),
            filter.year_range.min,
            filter.year_range.max
        );

        DashboardState {
            dataset,
            options,
            filter,
            tables,
        }
    }

    /// Loads the configured data file once and builds the startup state.
    pub fn load(config: &DashboardConfig) -> Result<Self, AppError> {
        let loader = DatasetLoader::new(&config.data_path);
        let dataset = loader.load()?;
        log::info!(
            target: "SYS",
            "loaded {} records from {} ({} dropped)",
            dataset.len(),
            loader.path().display(),
            dataset.dropped_rows()
        );
        Ok(Self::new(loader.into_dataset()?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn tables(&self) -> &DashboardTables {
        &self.tables
    }

    /// Replaces the filter snapshot and recomputes every table.
    /// On a rejected selection nothing changes.
    pub(crate) fn apply(&mut self, next: FilterState) -> Result<&DashboardTables, AppError> {
        next.validate(&self.options)?;
        self.tables = recompute(&self.dataset, &next);
        self.filter = next;
        Ok(&self.tables)
    }
}
