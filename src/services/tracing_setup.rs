//! Logging setup for the editor binary.
//!
//! The terminal belongs to the editor while it runs, so diagnostics go to a
//! log file instead of stderr.

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// `<cache dir>/toyedit/toyedit.log`, or the temp dir when there is no cache dir
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("toyedit")
        .join("toyedit.log")
}

/// Install the global subscriber writing to `log_file`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Fails, leaving
/// logging disabled, when the log file or its directory can't be created or
/// a subscriber is already installed.
pub fn init_global(log_file: &Path) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(log_file)
        .with_context(|| format!("failed to create log file {}", log_file.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))
}
