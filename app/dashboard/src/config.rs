//! FILENAME: app/dashboard/src/config.rs
// PURPOSE: Startup configuration. The only external input is where the data file lives.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the sales table.
pub const DATA_PATH_ENV: &str = "VGSALES_DATA";

/// Used when `VGSALES_DATA` is unset or empty.
pub const DEFAULT_DATA_FILE: &str = "vgsales.csv";

/// Log file name, placed in the system temp directory.
pub const LOG_FILE_NAME: &str = "vgsales-dashboard.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    /// `None` disables the log file (console only).
    pub log_path: Option<PathBuf>,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Like `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let data_path = lookup(DATA_PATH_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        DashboardConfig {
            data_path,
            log_path: Some(env::temp_dir().join(LOG_FILE_NAME)),
        }
    }

    /// Config for an explicit data file, without a log file.
    pub fn with_data_path(path: impl Into<PathBuf>) -> Self {
        DashboardConfig {
            data_path: path.into(),
            log_path: None,
        }
    }
}
