//! Guards the embedded splash video.
//!
//! The checked-in `assets/splash.mp4` is a bare container header so debug
//! builds and tests work without the real footage. Release builds refuse it.

use std::{env, fs};

const SPLASH_VIDEO: &str = "assets/splash.mp4";

// Anything this small cannot hold a playable frame.
const MIN_RELEASE_BYTES: u64 = 1024;

fn main() {
  println!("cargo:rerun-if-changed={SPLASH_VIDEO}");

  let len = match fs::metadata(SPLASH_VIDEO) {
    Ok(meta) => meta.len(),
    Err(e) => panic!("{SPLASH_VIDEO} is missing: {e}"),
  };
  if len >= MIN_RELEASE_BYTES {
    return;
  }

  if env::var("PROFILE").as_deref() == Ok("release") {
    panic!("{SPLASH_VIDEO} is only {len} bytes (placeholder); replace it with the real splash footage before a release build");
  }
  println!("cargo:warning={SPLASH_VIDEO} is a {len}-byte placeholder; release builds will fail until real footage is added");
}
