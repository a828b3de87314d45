//! Command construction and fire-and-forget process launching.

use anyhow::{Context, Result, anyhow};
use std::{
  ffi::OsString,
  path::{Path, PathBuf},
  process::Stdio,
};
use tokio::process::{Child, Command};
use tracing::debug;

use crate::{constants::Constants, user::UserContext};

/// A program and its argument vector, ready to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
  /// Human-readable name used in log lines and errors.
  pub label: String,
  pub program: PathBuf,
  pub args: Vec<OsString>,
}

impl CommandSpec {
  /// The media player invocation: fixed playback flags, then the video path last.
  pub fn player(program: impl Into<PathBuf>, video_path: &Path, constants: &Constants) -> Self {
    let mut args: Vec<OsString> = constants.player_args.iter().map(OsString::from).collect();
    args.push(video_path.as_os_str().to_owned());
    Self { label: constants.player_label.clone(), program: program.into(), args }
  }

  /// The target application, started from the user's profile with its own splash suppressed.
  pub fn target(user: &UserContext, constants: &Constants) -> Self {
    Self {
      label: constants.target_label.clone(),
      program: user.target_executable(constants),
      args: constants.target_args.iter().map(OsString::from).collect(),
    }
  }
}

/// Starts commands without waiting on them.
///
/// Implementations hand back whatever handle they have; callers are free to
/// drop it, in which case the child is neither waited on nor killed.
pub trait Launcher {
  type Handle;

  fn launch(&self, spec: &CommandSpec) -> Result<Self::Handle>;
}

/// Spawns real OS processes with all stdio detached.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessLauncher;

impl Launcher for ProcessLauncher {
  type Handle = Child;

  fn launch(&self, spec: &CommandSpec) -> Result<Child> {
    let mut cmd = Command::new(&spec.program);
    cmd.args(&spec.args);
    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::null());
    cmd.stderr(Stdio::null());
    cmd.kill_on_drop(false);

    let child = cmd
      .spawn()
      .map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
          anyhow!("{} not found at {}", spec.label, spec.program.display())
        } else {
          anyhow!(e)
        }
      })
      .with_context(|| format!("failed to start {}", spec.label))?;
    debug!(pid = ?child.id(), program = %spec.program.display(), "{} started; not waiting on it", spec.label);
    Ok(child)
  }
}
