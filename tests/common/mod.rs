//! Shared test utilities and fixture generators

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `content` to a file named `name` inside `dir`, returning its path.
#[allow(dead_code)]
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Write raw bytes to a file named `name` inside `dir`, returning its path.
#[allow(dead_code)]
pub fn write_binary_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}
