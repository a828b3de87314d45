//! Executable search path lookup.

use std::{
  ffi::OsStr,
  path::{Path, PathBuf},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
  #[error("executable '{name}' not found on the search path")]
  NotFound { name: String },
}

/// Resolve `name` against `search_path` (a `PATH`-style list).
///
/// Names containing a path separator are checked as-is instead of searched.
/// Empty entries are skipped rather than treated as the working directory.
pub fn find_executable(name: &str, search_path: &OsStr) -> Result<PathBuf, LookupError> {
  let not_found = || LookupError::NotFound { name: name.to_string() };
  if name.is_empty() {
    return Err(not_found());
  }

  let direct = Path::new(name);
  if direct.components().count() > 1 {
    return resolve_candidate(direct).ok_or_else(not_found);
  }

  std::env::split_paths(search_path)
    .filter(|dir| !dir.as_os_str().is_empty())
    .find_map(|dir| resolve_candidate(&dir.join(name)))
    .ok_or_else(not_found)
}

fn resolve_candidate(path: &Path) -> Option<PathBuf> {
  candidates(path, &path_extensions()).into_iter().find(|p| is_executable(p))
}

/// Paths to probe for `path`, in order.
///
/// With no executable extensions (Unix) that is just `path`. Otherwise the
/// path itself is tried only if it already has an extension, followed by
/// `path` with each extension appended, so `my.player` still reaches
/// `my.player.exe`.
fn candidates(path: &Path, exts: &[String]) -> Vec<PathBuf> {
  let mut out = Vec::with_capacity(exts.len() + 1);
  if exts.is_empty() || path.extension().is_some() {
    out.push(path.to_path_buf());
  }
  out.extend(exts.iter().map(|ext| {
    let mut with_ext = path.as_os_str().to_owned();
    with_ext.push(ext);
    PathBuf::from(with_ext)
  }));
  out
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
  use std::os::unix::fs::PermissionsExt;
  std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
  std::fs::metadata(path).is_ok_and(|m| m.is_file())
}

#[cfg(windows)]
fn path_extensions() -> Vec<String> {
  std::env::var("PATHEXT")
    .unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string())
    .split(';')
    .filter(|ext| !ext.is_empty())
    .map(|ext| {
      let ext = ext.to_ascii_lowercase();
      if ext.starts_with('.') { ext } else { format!(".{ext}") }
    })
    .collect()
}

#[cfg(not(windows))]
fn path_extensions() -> Vec<String> {
  Vec::new()
}
