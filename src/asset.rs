//! The embedded splash video and its extraction to disk.

use anyhow::{Context, Result};
use std::{
  fs,
  path::{Path, PathBuf},
};
use tracing::info;

use crate::constants::Constants;

/// Splash footage bundled into the binary.
pub static SPLASH_VIDEO: &[u8] = include_bytes!("../assets/splash.mp4");

/// Write `content` into a new uniquely named directory under `temp_root`.
///
/// The directory is kept when the launcher exits; the player still needs
/// the file, and the OS temp cleanup reclaims it later.
pub fn extract(content: &[u8], temp_root: &Path, constants: &Constants) -> Result<PathBuf> {
  let dir = tempfile::Builder::new()
    .prefix(&constants.temp_dir_prefix)
    .tempdir_in(temp_root)
    .context("failed to create temporary directory")?
    .keep();

  let path = dir.join(&constants.video_file_name);
  fs::write(&path, content).context("failed to write splash video to temporary file")?;

  info!("Temporary splash video created at: {}", path.display());
  Ok(path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::constants;
  use tempfile::tempdir;

  #[test]
  fn extracted_bytes_match() {
    let scratch = tempdir().unwrap();
    let content: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    let path = extract(&content, scratch.path(), constants()).unwrap();

    assert_eq!(fs::read(&path).unwrap(), content);
    assert_eq!(path.file_name().unwrap(), "splash.mp4");
    assert!(path.starts_with(scratch.path()));
  }

  #[test]
  fn embedded_video_round_trips() {
    let scratch = tempdir().unwrap();
    let path = extract(SPLASH_VIDEO, scratch.path(), constants()).unwrap();
    assert_eq!(fs::read(&path).unwrap(), SPLASH_VIDEO);
  }

  #[test]
  fn empty_content_yields_empty_file() {
    let scratch = tempdir().unwrap();
    let path = extract(&[], scratch.path(), constants()).unwrap();
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
  }

  #[test]
  fn each_extraction_gets_a_fresh_directory() {
    let scratch = tempdir().unwrap();

    let first = extract(b"one", scratch.path(), constants()).unwrap();
    let second = extract(b"two", scratch.path(), constants()).unwrap();

    assert_ne!(first.parent(), second.parent());
    assert_eq!(fs::read(&first).unwrap(), b"one");
    assert_eq!(fs::read(&second).unwrap(), b"two");

    let dir_name = first.parent().unwrap().file_name().unwrap().to_string_lossy().into_owned();
    assert!(dir_name.starts_with("splash"));
  }

  #[test]
  fn extracted_directory_outlives_the_call() {
    let scratch = tempdir().unwrap();
    let path = extract(b"kept", scratch.path(), constants()).unwrap();
    assert!(path.parent().unwrap().is_dir());
    assert!(path.is_file());
  }

  #[test]
  fn missing_temp_root_fails() {
    let scratch = tempdir().unwrap();
    let err = extract(b"x", &scratch.path().join("gone"), constants()).unwrap_err();
    assert!(format!("{err:#}").contains("failed to create temporary directory"));
  }

  #[test]
  fn embedded_video_is_present() {
    assert!(!SPLASH_VIDEO.is_empty());
  }

  // Mirrors the build script guard: optimized builds must carry real footage.
  #[cfg(not(debug_assertions))]
  #[test]
  fn release_video_is_not_a_placeholder() {
    assert!(SPLASH_VIDEO.len() >= 1024, "assets/splash.mp4 is still the placeholder");
  }
}
