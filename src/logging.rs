//! File-backed logging.
//!
//! The launcher does not install a global subscriber. [`Logger`] owns a
//! `tracing::Dispatch` bound to the log file, and callers run their work
//! inside [`Logger::scope`] so every event lands in that file.

use anyhow::{Context, Result};
use std::{
  fs::{File, OpenOptions},
  io,
  path::Path,
};
use tracing::{Dispatch, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::constants::constants;

/// Open `path` for appending, creating it (owner read/write) if absent.
pub fn open_log_file(path: &Path) -> io::Result<File> {
  let mut options = OpenOptions::new();
  options.append(true).create(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(0o644);
  }
  options.open(path)
}

/// Build the event filter: an explicit directive wins, then `RUST_LOG`, then the built-in default.
pub fn env_filter(directive: Option<&str>) -> Result<EnvFilter> {
  match directive {
    Some(d) => EnvFilter::try_new(d).with_context(|| format!("invalid log filter '{d}'")),
    None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&constants().log_filter))),
  }
}

pub struct Logger {
  dispatch: Dispatch,
  // Flushes the background writer when the logger is dropped.
  _guard: WorkerGuard,
}

impl Logger {
  pub fn init(path: &Path, filter: EnvFilter) -> Result<Self> {
    let file = open_log_file(path).with_context(|| format!("failed to initialize log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    let subscriber = tracing_subscriber::fmt()
      .with_writer(writer)
      .with_ansi(false)
      .with_env_filter(filter)
      .finish();

    let logger = Self { dispatch: Dispatch::new(subscriber), _guard: guard };
    logger.scope(|| info!(path = %path.display(), "Log file initialized"));
    Ok(logger)
  }

  /// Run `f` with this logger as the current thread's default dispatcher.
  pub fn scope<T>(&self, f: impl FnOnce() -> T) -> T {
    tracing::dispatcher::with_default(&self.dispatch, f)
  }
}
