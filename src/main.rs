#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // no console window in release builds on Windows

mod asset;
mod constants;
mod launcher;
mod logging;
mod lookup;
mod splash;
mod user;

#[cfg(test)]
mod testutil;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error};

use constants::constants;
use launcher::{Launcher, ProcessLauncher};
use logging::Logger;
use splash::Splash;

// --- CLI ---

#[derive(Parser, Debug)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
struct Args {
  /// Log file to append to (default: logFile.log in the working directory)
  #[arg(long)]
  log_file: Option<PathBuf>,

  /// Media player executable to look up on PATH (default: vlc)
  #[arg(long)]
  player: Option<String>,

  /// Home directory the target application is installed under (default: current user's home)
  #[arg(long)]
  home: Option<PathBuf>,

  /// Log filter directive such as 'debug' (default: RUST_LOG, then info)
  #[arg(long)]
  log_level: Option<String>,
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
  launch(Args::parse(), &ProcessLauncher)
}

/// Open the log, run the launch sequence, and report any failure.
///
/// This is the only place errors are handled: the error is logged, the log
/// is flushed, and the error is returned so the process exits nonzero.
fn launch<L: Launcher>(args: Args, launcher: &L) -> Result<()> {
  let log_file = args.log_file.clone().unwrap_or_else(|| PathBuf::from(&constants().log_file));
  let filter = logging::env_filter(args.log_level.as_deref())?;
  let logger = Logger::init(&log_file, filter)?;

  let result = logger.scope(|| -> Result<()> {
    let launched = Splash::from_env(args.player, args.home).run(launcher)?;
    debug!(video = %launched.video_path.display(), "both processes started");
    Ok(())
  });
  if let Err(ref e) = result {
    logger.scope(|| error!("Error: {e:#}"));
  }
  // Flush the log before the process exits, on both paths.
  drop(logger);
  result
}
