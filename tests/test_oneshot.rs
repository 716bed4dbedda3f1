//! End-to-end tests for the flag-driven (--no-confirm) cycle

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn retext() -> Command {
    Command::cargo_bin("retext").unwrap()
}

#[test]
fn test_oneshot_applies_transform() {
    let dir = TempDir::new().unwrap();
    let input = common::write_fixture(&dir, "in.txt", "hello world. this is a TEST!");
    let output = dir.path().join("out.txt");

    retext()
        .arg("--no-confirm")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-t", "capitalize"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capitalize"));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Hello world. This is a test!"
    );
}

#[test]
fn test_oneshot_derives_output_path() {
    let dir = TempDir::new().unwrap();
    let input = common::write_fixture(&dir, "in.txt", "quiet words");

    retext()
        .arg("--no-confirm")
        .arg("-i")
        .arg(&input)
        .args(["-t", "uppercase"])
        .assert()
        .success();

    let derived = dir.path().join("in_out.txt");
    assert_eq!(fs::read_to_string(&derived).unwrap(), "QUIET WORDS");
}

#[test]
fn test_oneshot_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    let input = common::write_fixture(&dir, "in.txt", "abc");
    let output = common::write_fixture(&dir, "out.txt", "precious");

    retext()
        .arg("--no-confirm")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-t", "uppercase"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // Existing content untouched
    assert_eq!(fs::read_to_string(&output).unwrap(), "precious");
}

#[test]
fn test_oneshot_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let input = common::write_fixture(&dir, "in.txt", "abc");
    let output = common::write_fixture(&dir, "out.txt", "precious");

    retext()
        .arg("--no-confirm")
        .arg("--force")
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-t", "uppercase"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "ABC");
}

#[test]
fn test_oneshot_requires_transform() {
    let dir = TempDir::new().unwrap();
    let input = common::write_fixture(&dir, "in.txt", "abc");

    retext()
        .arg("--no-confirm")
        .arg("-i")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--transform is required"));
}

#[test]
fn test_oneshot_rejects_unknown_transform() {
    let dir = TempDir::new().unwrap();
    let input = common::write_fixture(&dir, "in.txt", "abc");

    retext()
        .arg("--no-confirm")
        .arg("-i")
        .arg(&input)
        .args(["-t", "shout"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown transform"));
}

#[test]
fn test_oneshot_reports_missing_input_file() {
    let dir = TempDir::new().unwrap();

    retext()
        .arg("--no-confirm")
        .arg("-i")
        .arg(dir.path().join("nope.txt"))
        .args(["-t", "identity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_list_subcommand_prints_catalogue() {
    retext()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("uppercase"))
        .stdout(predicate::str::contains("collapse-spaces"))
        .stdout(predicate::str::contains("line number"));
}
