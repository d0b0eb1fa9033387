//! FILENAME: app/dashboard/src/logging.rs
// PURPOSE: Unified logging for the dashboard process.
// FORMAT: seq|time|level|category|message  (category = `log` target)

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter, so interleaved file/console output can be re-sorted.
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Log file handle; `None` means console-only.
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

static LOGGER: DashboardLogger = DashboardLogger;

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Single-letter level code used in log lines.
pub fn level_code(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

/// Builds one log line without the trailing newline.
pub fn format_line(seq: u64, level: &str, category: &str, message: &str) -> String {
    let time = chrono::Local::now().format("%H:%M:%S%.3f");
    format!("{}|{}|{}|{}|{}", seq, time, level, category, message)
}

/// Opens (truncating) the log file at `path`.
pub fn init_log_file(path: &Path) -> Result<PathBuf, String> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| format!("Failed to create log file {:?}: {}", path, e))?;

    let mut log_file = LOG_FILE.lock().map_err(|e| format!("Lock error: {}", e))?;
    *log_file = Some(file);

    Ok(path.to_path_buf())
}

/// Write a log line in unified format.
/// Goes to stderr; stdout is reserved for the rendered dashboard.
pub fn write_log(level: &str, category: &str, message: &str) {
    let line = format_line(next_seq(), level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
        }
    }

    eprintln!("{}", line);
}

// ============================================================================
// `log` FACADE
// ============================================================================

/// Routes `log` macros from every crate through `write_log`.
struct DashboardLogger;

impl Log for DashboardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_log(
                level_code(record.level()),
                record.target(),
                &record.args().to_string(),
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

/// Installs the logger. A file that cannot be opened leaves console-only logging.
///
/// Returns the log file path when file logging is active. Fails only if
/// another logger was installed first.
pub fn init_logging(log_path: Option<&Path>, level: LevelFilter) -> Result<Option<PathBuf>, String> {
    log::set_logger(&LOGGER).map_err(|e| format!("Logger already installed: {}", e))?;
    log::set_max_level(level);

    let Some(path) = log_path else {
        return Ok(None);
    };

    match init_log_file(path) {
        Ok(path) => Ok(Some(path)),
        Err(e) => {
            eprintln!("[LOG_INIT] {}", e);
            eprintln!("[LOG_INIT] Continuing with console-only logging");
            Ok(None)
        }
    }
}
