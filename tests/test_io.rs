//! Tests for file reading/writing and error-kind classification

mod common;

use std::fs;

use retext::session::{read_text, write_text, ReadError, WriteError};
use tempfile::TempDir;

#[test]
fn test_read_returns_exact_contents() {
    let dir = TempDir::new().unwrap();
    let content = "héllo wörld\nsecond line\n";
    let path = common::write_fixture(&dir, "input.txt", content);

    assert_eq!(read_text(&path).unwrap(), content);
}

#[test]
fn test_read_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_text(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, ReadError::NotFound), "got {:?}", err);
}

#[test]
fn test_read_directory_is_classified() {
    let dir = TempDir::new().unwrap();
    let err = read_text(dir.path()).unwrap_err();
    assert!(matches!(err, ReadError::IsADirectory), "got {:?}", err);
}

#[test]
fn test_read_binary_is_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = common::write_binary_fixture(&dir, "blob.bin", &[0xff, 0xfe, 0x00, 0x41]);

    let err = read_text(&path).unwrap_err();
    assert!(matches!(err, ReadError::InvalidUtf8), "got {:?}", err);
}

#[test]
fn test_write_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.txt");

    write_text(&path, "transformed\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "transformed\n");
}

#[test]
fn test_write_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = common::write_fixture(&dir, "out.txt", "old content");

    write_text(&path, "new").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_write_into_missing_directory_is_io() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let err = write_text(&path, "x").unwrap_err();
    assert!(matches!(err, WriteError::Io(_)), "got {:?}", err);
}
