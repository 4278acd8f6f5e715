//! Tracing setup for the `phishlens` binary.
//!
//! Events go to `$XDG_STATE_HOME/phishlens/phishlens.log`. `RUST_LOG`
//! overrides the default filter.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,phishlens=debug,phishlens_core=debug";
const LOG_FILE: &str = "phishlens.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn log_path_in(state_home: &Path) -> PathBuf {
    state_home.join("phishlens").join(LOG_FILE)
}

/// Append structured logs to the state-dir log file and return its path.
///
/// Fails if the file cannot be opened or a subscriber is already installed;
/// the caller then falls back to [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("phishlens")?;
    let path = log_path_in(&xdg_dirs.get_state_home());
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("create log dir {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::debug!(path = %path.display(), "file logging enabled");
    Ok(path)
}

/// Log to stderr instead. Keeps any subscriber that is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
