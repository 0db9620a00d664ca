//! Logging setup for the `b2auth` binary: append to a file under the XDG
//! state dir, or log to stderr when that is not possible.
//!
//! Library code in this crate never installs a subscriber.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "info,b2auth=debug,b2auth_core=debug";

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_DIRECTIVES`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// `~/.local/state/b2auth/b2auth.log` (or `$XDG_STATE_HOME/b2auth/b2auth.log`).
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("b2auth")?;
    Ok(xdg_dirs.get_state_home().join("b2auth.log"))
}

/// Plain-text subscriber appending to `file`; writes are serialized by the mutex.
fn file_subscriber(file: File) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish()
}

/// Installs a file-backed subscriber and returns the log path.
///
/// Errors if the state dir or log file cannot be opened, or a global
/// subscriber is already set; the caller may then use [`init_logging_stderr`].
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log dir {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    file_subscriber(file)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install subscriber: {e}"))?;

    tracing::info!("b2auth logging initialized at {}", path.display());
    Ok(path)
}

/// Stderr-only logging. A subscriber that is already installed is kept.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}
