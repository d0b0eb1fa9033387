//! FILENAME: core/dataset/src/loader.rs
//! PURPOSE: Picks a reader from the file extension and memoizes the result.
//! CONTEXT: The dashboard loads its table exactly once per process. The loader
//! is an owned value rather than a global so callers decide its lifetime.

use crate::csv_reader::read_delimited;
use crate::xlsx_reader::read_xlsx;
use crate::{Dataset, DatasetError};
use once_cell::unsync::OnceCell;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Container format of a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Delimited(u8),
    Xlsx,
}

impl SourceFormat {
    /// Unknown extensions fall back to comma-delimited text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("tsv") | Some("tab") => SourceFormat::Delimited(b'\t'),
            Some("xlsx") | Some("xlsm") => SourceFormat::Xlsx,
            _ => SourceFormat::Delimited(b','),
        }
    }
}

/// Reads and normalizes the source file. No caching.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    let format = SourceFormat::from_path(path);
    log::info!(target: "DATA", "loading {} as {:?}", path.display(), format);
    let started = Instant::now();

    let dataset = match format {
        SourceFormat::Delimited(delimiter) => read_delimited(path, delimiter),
        SourceFormat::Xlsx => read_xlsx(path),
    }
    .map_err(|e| {
        log::error!(target: "DATA", "load of {} failed: {}", path.display(), e);
        e
    })?;

    log::info!(
        target: "DATA",
        "loaded {} records ({} dropped) in {:?}",
        dataset.len(),
        dataset.dropped_rows(),
        started.elapsed()
    );
    Ok(dataset)
}

// ============================================================================
// MEMOIZED LOADER
// ============================================================================

/// Loads the dataset on first use and hands out the cached copy afterwards.
///
/// A failed load is not cached; callers treat it as fatal instead of retrying.
#[derive(Debug)]
pub struct DatasetLoader {
    path: PathBuf,
    cache: OnceCell<Dataset>,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatasetLoader {
            path: path.into(),
            cache: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// Idempotent: the file is read at most once per loader.
    pub fn load(&self) -> Result<&Dataset, DatasetError> {
        if let Some(dataset) = self.cache.get() {
            log::debug!(target: "DATA", "dataset cache hit for {}", self.path.display());
            return Ok(dataset);
        }
        self.cache.get_or_try_init(|| load_dataset(&self.path))
    }

    /// Gives up the loader and returns the owned dataset, loading it if needed.
    pub fn into_dataset(self) -> Result<Dataset, DatasetError> {
        match self.cache.into_inner() {
            Some(dataset) => Ok(dataset),
            None => load_dataset(&self.path),
        }
    }
}
