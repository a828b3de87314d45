//! Launcher constants loaded from `constants.ron` at compile time.
//!
//! The RON file is embedded via `include_str!`, parsed once on first access
//! via `LazyLock`.

use serde::Deserialize;
use std::sync::LazyLock;

/// Fixed values for the player, the splash asset, and the target application.
#[derive(Debug, Deserialize)]
pub struct Constants {
  pub log_file: String,
  pub log_filter: String,

  // Media player
  pub player_program: String,
  pub player_label: String,
  pub player_args: Vec<String>,

  // Splash asset
  pub temp_dir_prefix: String,
  pub video_file_name: String,

  // Target application
  pub target_label: String,
  pub target_path: Vec<String>,
  pub target_args: Vec<String>,
}

static CONSTANTS: LazyLock<Constants> = LazyLock::new(|| {
  // Safety: the RON file is embedded at compile time; if it's malformed every run fails the same way.
  ron::from_str(include_str!("../constants.ron")).expect("constants.ron must be valid RON (embedded at compile time)")
});

/// Returns a reference to the parsed launcher constants.
pub fn constants() -> &'static Constants {
  &CONSTANTS
}
