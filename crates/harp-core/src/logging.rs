//! Logging setup for the CLI: append to a file in the XDG state dir, or log to
//! stderr when that file cannot be opened.
//!
//! `RUST_LOG` overrides [`DEFAULT_FILTER`].

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,harp=debug,harp_core=debug";

pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// `~/.local/state/harp/harp.log`; the directory is created if missing.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harp")?;
    xdg_dirs
        .place_state_file("harp.log")
        .context("create harp state directory")
}

/// Installs a subscriber that appends to [`log_file_path`] and returns that path.
/// An error leaves no subscriber installed so the caller can fall back to
/// [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install log subscriber: {}", e))?;

    tracing::debug!("logging to {}", path.display());
    Ok(path)
}

/// Logs to stderr. Does nothing if a subscriber is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
