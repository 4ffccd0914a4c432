//! Tests for the loader and binder.
//!
//! Invariants:
//! - Tests that touch process-global state (cwd or env) hold `env_lock()`.
//! - Fixture files live in `tempfile` directories and are removed automatically.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `name` inside `dir` and return its path.
pub fn write_env_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}
