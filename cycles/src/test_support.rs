//! Test-only helpers for writing config fixtures.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::config::CONFIG_FILE;

/// Write `contents` to `cycles.toml` inside a fresh temp directory.
///
/// The returned `TempDir` must be kept alive for the path to remain valid.
pub fn config_in_tempdir(contents: &str) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join(CONFIG_FILE);
    fs::write(&path, contents).expect("write config fixture");
    (temp, path)
}

/// Sum of even integers in `[start, end]` by plain filtering.
pub fn brute_even_sum(start: i64, end: i64) -> i64 {
    (start..=end).filter(|k| k % 2 == 0).sum()
}
