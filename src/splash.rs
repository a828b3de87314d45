//! The launch sequence: find the player, resolve the user, extract the
//! video, then start the player and the target application.
//!
//! Every step returns its error to the caller; nothing here exits the process.

use anyhow::{Context, Result};
use std::{ffi::OsString, path::PathBuf};
use tracing::{debug, info};

use crate::{
  asset::{self, SPLASH_VIDEO},
  constants::constants,
  launcher::{CommandSpec, Launcher},
  lookup::find_executable,
  user::UserContext,
};

/// Inputs for one launch.
#[derive(Debug, Clone)]
pub struct Splash {
  /// Player executable name (or path) to look up.
  pub player: String,
  /// `PATH`-style list searched for the player.
  pub search_path: OsString,
  /// Parent of the per-run temporary directory.
  pub temp_root: PathBuf,
  /// Home directory override; `None` resolves the current OS user.
  pub home: Option<PathBuf>,
  pub asset: &'static [u8],
}

/// Result of a successful launch. The handles may be dropped without waiting.
#[derive(Debug)]
pub struct Launched<H> {
  pub video_path: PathBuf,
  pub player: H,
  pub target: H,
}

impl Splash {
  /// Settings for a real run, taken from the process environment.
  pub fn from_env(player: Option<String>, home: Option<PathBuf>) -> Self {
    Self {
      player: player.unwrap_or_else(|| constants().player_program.clone()),
      search_path: std::env::var_os("PATH").unwrap_or_default(),
      temp_root: std::env::temp_dir(),
      home,
      asset: SPLASH_VIDEO,
    }
  }

  pub fn run<L: Launcher>(&self, launcher: &L) -> Result<Launched<L::Handle>> {
    let c = constants();

    let player_path = find_executable(&self.player, &self.search_path)
      .with_context(|| format!("{0} not found in PATH. Ensure {0} is installed and accessible", c.player_label))?;
    debug!(path = %player_path.display(), "player resolved");

    let user = match &self.home {
      Some(home) => UserContext::with_home(home.clone()),
      None => UserContext::current()?,
    };
    debug!(home = %user.home_dir.display(), "user resolved");

    let video_path =
      asset::extract(self.asset, &self.temp_root, c).context("failed to create temporary splash video file")?;

    let play_video = CommandSpec::player(player_path, &video_path, c);
    let launch_target = CommandSpec::target(&user, c);

    info!("Starting {} to play splash video...", play_video.label);
    let player = launcher.launch(&play_video)?;

    info!("Launching {}...", launch_target.label);
    let target = launcher.launch(&launch_target)?;

    Ok(Launched { video_path, player, target })
  }
}
