//! File-backed tracing setup.
//!
//! The terminal belongs to the UI, so log lines go to
//! `<data_dir>/caltrack/caltrack.log`. `RUST_LOG` overrides the default filter.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::tui::AppError;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "caltrack=info";

/// Returns the log file path under the given base directory.
pub fn log_file_in(base: &Path) -> PathBuf {
    base.join("caltrack").join("caltrack.log")
}

/// Installs the global subscriber, appending to the log file.
///
/// Returns the log file path, or `None` when the platform has no data
/// directory (logging is then disabled).
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init() -> Result<Option<PathBuf>, AppError> {
    let Some(data_dir) = dirs::data_dir() else {
        return Ok(None);
    };
    let path = log_file_in(&data_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(Some(path))
}
