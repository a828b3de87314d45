use anyhow::{Context, Result};
use directories::UserDirs;
use std::path::PathBuf;

use crate::constants::Constants;

/// The user profile the target application is installed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
  pub home_dir: PathBuf,
}

impl UserContext {
  /// Ask the OS for the current user's home directory.
  pub fn current() -> Result<Self> {
    let dirs = UserDirs::new().context("failed to retrieve current user: no home directory")?;
    Ok(Self::with_home(dirs.home_dir()))
  }

  pub fn with_home(home: impl Into<PathBuf>) -> Self {
    Self { home_dir: home.into() }
  }

  /// Install location of the target application under this user's profile.
  pub fn target_executable(&self, constants: &Constants) -> PathBuf {
    constants.target_path.iter().fold(self.home_dir.clone(), |path, segment| path.join(segment))
  }
}
