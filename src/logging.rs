//! File logging setup.
//!
//! The terminal belongs to the TUI, so log lines go to
//! `$XDG_DATA_HOME/subject-tui/subject-tui.log`.

use crate::config::APP_DIR;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter (e.g. `debug`, `subject_tui=trace`).
pub const LOG_ENV: &str = "SUBJECT_TUI_LOG";

/// Directory holding the log file.
pub fn log_dir() -> Result<PathBuf> {
    let data_dir =
        dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine data directory"))?;
    Ok(data_dir.join(APP_DIR))
}

/// Install the global tracing subscriber.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the log file
///
/// # Details
/// The filter is read from `SUBJECT_TUI_LOG` and defaults to `info`.
pub fn initialize_logging() -> Result<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let path = dir.join(format!("{}.log", APP_DIR));
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(path)
}
