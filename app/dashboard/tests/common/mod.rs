//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for dashboard integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use dashboard_lib::{DashboardConfig, DashboardState};
use tempfile::TempDir;

pub const HEADER: &str =
    "Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales";

/// A slice of the public vgsales table, with one missing Year.
pub const SAMPLE_ROWS: &[&str] = &[
    "1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74",
    "2,Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24",
    "3,Mario Kart Wii,Wii,2008,Racing,Nintendo,15.85,12.88,3.79,3.31,35.82",
    "4,Wii Sports Resort,Wii,2009,Sports,Nintendo,15.75,11.01,3.28,2.96,33",
    "5,Pokemon Red/Pokemon Blue,GB,1996,Role-Playing,Nintendo,11.27,8.89,10.22,1,31.37",
    "6,Tetris,GB,1989,Puzzle,Nintendo,23.2,2.26,4.22,0.58,30.26",
    "7,New Super Mario Bros.,DS,2006,Platform,Nintendo,11.38,9.23,6.5,2.9,30.01",
    "8,Wii Play,Wii,2006,Misc,Nintendo,14.03,9.2,2.93,2.85,29.02",
    "9,Grand Theft Auto V,PS3,2013,Action,Take-Two Interactive,7.01,9.27,0.97,4.14,21.4",
    "10,Madden NFL 2004,PS2,N/A,Sports,Electronic Arts,4.26,0.26,0.01,0.71,5.23",
];

/// Test harness owning a temp directory with a data file in it.
pub struct TestHarness {
    pub dir: TempDir,
    pub data_path: PathBuf,
}

impl TestHarness {
    /// Harness whose data file holds `SAMPLE_ROWS`.
    pub fn with_sample_data() -> Self {
        Self::with_rows(SAMPLE_ROWS)
    }

    /// Harness with `HEADER` followed by `rows`.
    pub fn with_rows(rows: &[&str]) -> Self {
        let mut text = String::from(HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        Self::with_file("vgsales.csv", &text)
    }

    /// Harness with an arbitrary file body.
    pub fn with_file(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let data_path = dir.path().join(name);
        fs::write(&data_path, contents).unwrap();
        TestHarness { dir, data_path }
    }

    pub fn config(&self) -> DashboardConfig {
        DashboardConfig::with_data_path(&self.data_path)
    }

    pub fn state(&self) -> DashboardState {
        DashboardState::load(&self.config()).unwrap()
    }
}
