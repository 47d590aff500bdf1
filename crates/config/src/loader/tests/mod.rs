//! Tests for the loader and its population strategies.
//!
//! Invariants:
//! - Tests that touch the process environment use `serial_test` and `temp_env`.
//! - Tests use `global_test_lock()` when they also change process-global state outside temp_env.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};
use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `name` inside `dir` and return its path.
pub fn write_env_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write env file");
    path
}
