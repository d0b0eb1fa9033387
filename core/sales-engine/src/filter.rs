//! FILENAME: core/sales-engine/src/filter.rs
//! Filter State - The user's current selection.
//!
//! A `FilterState` is an immutable snapshot of the three dashboard widgets
//! (genre multi-select, platform multi-select, year slider). Changing any
//! widget produces a new value; nothing is updated in place.

use std::collections::BTreeSet;

use dataset::{Dataset, Record};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lower bound of the default year range, clamped into the data's own range.
pub const DEFAULT_YEAR_FLOOR: i32 = 2000;

// ============================================================================
// YEAR RANGE
// ============================================================================

/// Inclusive year range. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        YearRange { min, max }
    }

    pub fn single(year: i32) -> Self {
        YearRange { min: year, max: year }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

// ============================================================================
// FILTER OPTIONS
// ============================================================================

/// What the widgets can offer, derived from the loaded data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Sorted, distinct.
    pub genres: Vec<String>,
    /// Sorted, distinct.
    pub platforms: Vec<String>,
    /// Slider bounds; `None` when the dataset is empty.
    pub year_bounds: Option<YearRange>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        FilterOptions {
            genres: dataset.distinct_genres(),
            platforms: dataset.distinct_platforms(),
            year_bounds: dataset
                .year_bounds()
                .map(|(min, max)| YearRange::new(min, max)),
        }
    }

    /// Everything selected, years from `DEFAULT_YEAR_FLOOR` to the latest year.
    /// When the floor lies outside the data the range starts at the earliest year.
    pub fn default_state(&self) -> FilterState {
        let year_range = match self.year_bounds {
            Some(bounds) => {
                let floor = if bounds.contains(DEFAULT_YEAR_FLOOR) {
                    DEFAULT_YEAR_FLOOR
                } else {
                    bounds.min
                };
                YearRange::new(floor, bounds.max)
            }
            None => YearRange::single(DEFAULT_YEAR_FLOOR),
        };

        FilterState {
            genres: self.genres.iter().cloned().collect(),
            platforms: self.platforms.iter().cloned().collect(),
            year_range,
        }
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

/// A selection no widget could have produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Unknown genre: {0}")]
    UnknownGenre(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Year {year} is outside the data range {min}..={max}")]
    YearOutOfBounds { year: i32, min: i32, max: i32 },
}

/// Snapshot of the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub genres: BTreeSet<String>,
    pub platforms: BTreeSet<String>,
    pub year_range: YearRange,
}

impl FilterState {
    pub fn new<G, P>(genres: G, platforms: P, year_range: YearRange) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        FilterState {
            genres: genres.into_iter().map(Into::into).collect(),
            platforms: platforms.into_iter().map(Into::into).collect(),
            year_range,
        }
    }

    /// The startup selection for `dataset`.
    pub fn default_for(dataset: &Dataset) -> Self {
        FilterOptions::from_dataset(dataset).default_state()
    }

    pub fn with_genres<G>(&self, genres: G) -> Self
    where
        G: IntoIterator,
        G::Item: Into<String>,
    {
        FilterState {
            genres: genres.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    pub fn with_platforms<P>(&self, platforms: P) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
    {
        FilterState {
            platforms: platforms.into_iter().map(Into::into).collect(),
            ..self.clone()
        }
    }

    pub fn with_year_range(&self, year_range: YearRange) -> Self {
        FilterState {
            year_range,
            ..self.clone()
        }
    }

    /// Whether `record` is in the filtered view.
    pub fn accepts(&self, record: &Record) -> bool {
        self.year_range.contains(record.year)
            && self.genres.contains(record.genre.as_str())
            && self.platforms.contains(record.platform.as_str())
    }

    /// Rejects selections outside what `options` offers. Empty sets and an
    /// inverted year range are valid.
    pub fn validate(&self, options: &FilterOptions) -> Result<(), FilterError> {
        if let Some(genre) = self
            .genres
            .iter()
            .find(|g| options.genres.binary_search(*g).is_err())
        {
            return Err(FilterError::UnknownGenre(genre.clone()));
        }

        if let Some(platform) = self
            .platforms
            .iter()
            .find(|p| options.platforms.binary_search(*p).is_err())
        {
            return Err(FilterError::UnknownPlatform(platform.clone()));
        }

        if let Some(bounds) = options.year_bounds {
            for year in [self.year_range.min, self.year_range.max] {
                if !bounds.contains(year) {
                    return Err(FilterError::YearOutOfBounds {
                        year,
                        min: bounds.min,
                        max: bounds.max,
                    });
                }
            }
        }

        Ok(())
    }
}
