//! File-backed tracing setup.
//!
//! The terminal belongs to the TUI, so log output goes to
//! `<data_local_dir>/aura/aura.log` rather than stdout or stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::AppConfig;
use crate::error::{classify_io_error, AuraResult, SystemError};

/// Default log file location, if the platform has a data directory
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("aura").join("aura.log"))
}

/// Parse the configured filter, falling back to `info` on a bad directive
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Open (creating parents) the log file in append mode
pub fn open_log_file(path: &Path) -> AuraResult<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SystemError::DirectoryCreationFailed {
            path: parent.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| classify_io_error(e, Some(path.to_path_buf()), "open log file"))?;
    Ok(file)
}

/// Install the global subscriber.
///
/// Returns the log path in use, or `None` when logging is disabled
/// (`AURA_LOG=off` or no data directory).
pub fn init_logging(config: &AppConfig) -> AuraResult<Option<PathBuf>> {
    if config.log_filter.trim().eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    let path = match config.log_file.clone().or_else(default_log_path) {
        Some(path) => path,
        None => return Ok(None),
    };
    let file = open_log_file(&path)?;

    // A second init (tests, restarts) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .try_init();

    Ok(Some(path))
}
