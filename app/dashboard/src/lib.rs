//! FILENAME: app/dashboard/src/lib.rs
// PURPOSE: Main library entry point for the sales dashboard.
// CONTEXT: Wires config, logging, the memoized dataset load, the filter
// commands and the presentation adapters together.

use std::io;
use std::process::ExitCode;

use log::LevelFilter;

pub mod commands;
pub mod config;
mod error;
pub mod logging;
pub mod render;
pub mod state;

pub use config::DashboardConfig;
pub use error::AppError;
pub use logging::{init_log_file, init_logging, next_seq, write_log};
pub use render::{chart_slots, ChartPoint, ChartSlot, JsonAdapter, PresentationAdapter, TextAdapter};
pub use state::DashboardState;

/// Loads the data named by `config` and renders the default dashboard once.
///
/// Nothing is rendered when the load fails.
pub fn run_with(
    config: &DashboardConfig,
    adapter: &mut dyn PresentationAdapter,
) -> Result<DashboardState, AppError> {
    let state = DashboardState::load(config)?;
    adapter.render(state.tables())?;
    Ok(state)
}

/// Process entry point: logging, load, first render, exit status.
pub fn run() -> ExitCode {
    let config = DashboardConfig::from_env();

    match init_logging(config.log_path.as_deref(), LevelFilter::Info) {
        Ok(Some(path)) => log::info!(target: "SYS", "dashboard starting, log={}", path.display()),
        Ok(None) => log::info!(target: "SYS", "dashboard starting, console-only logging"),
        Err(e) => eprintln!("[LOG_INIT] FAILED: {}", e),
    }

    log::info!(target: "SYS", "data source: {}", config.data_path.display());

    let stdout = io::stdout();
    let mut adapter = TextAdapter::new(stdout.lock());

    match run_with(&config, &mut adapter) {
        Ok(state) => {
            log::info!(
                target: "SYS",
                "rendered {} of {} records",
                state.tables().filtered_rows,
                state.dataset().len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!(target: "SYS", "{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
