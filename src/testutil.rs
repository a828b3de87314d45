use anyhow::{Context, Result, anyhow};
use std::{
  cell::RefCell,
  fs,
  path::{Path, PathBuf},
};

use crate::launcher::{CommandSpec, Launcher};

/// Create `root/rel` (and parents) and return it.
pub fn subdir(root: &Path, rel: impl AsRef<Path>) -> PathBuf {
  let path = root.join(rel);
  fs::create_dir_all(&path).expect("create subdir");
  path
}

/// Write `body` to `path` and mark it executable.
pub fn write_executable(path: &Path, body: &str) {
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).expect("create parent dir");
  }
  fs::write(path, body).expect("write executable");
  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod executable");
  }
}

/// Records every launch instead of starting anything.
#[derive(Default)]
pub struct RecordingLauncher {
  pub launched: RefCell<Vec<CommandSpec>>,
  /// Label of a command whose start should fail.
  pub fail_on: Option<&'static str>,
}

impl Launcher for RecordingLauncher {
  type Handle = ();

  fn launch(&self, spec: &CommandSpec) -> Result<()> {
    self.launched.borrow_mut().push(spec.clone());
    if self.fail_on == Some(spec.label.as_str()) {
      return Err(anyhow!("permission denied")).with_context(|| format!("failed to start {}", spec.label));
    }
    Ok(())
  }
}
