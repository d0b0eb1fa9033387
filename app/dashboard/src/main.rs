//! FILENAME: app/dashboard/src/main.rs
// PURPOSE: Entry point. Loads the sales table and renders the default dashboard.
// FORMAT (log): seq|time|level|category|message

use std::process::ExitCode;

fn main() -> ExitCode {
    dashboard_lib::run()
}
