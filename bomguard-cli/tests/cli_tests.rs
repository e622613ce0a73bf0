//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

/// Build command for the check binary.
fn bomguard() -> Command {
    cargo_bin_cmd!("bomguard")
}

/// Build command for the lookup binary.
fn bomguard_lookup() -> Command {
    cargo_bin_cmd!("bomguard-lookup")
}

/// Path to bomguard library test fixtures (relative to workspace).
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("bomguard")
        .join("tests")
        .join("fixtures")
}

#[test]
fn test_cli_help() {
    let mut cmd = bomguard();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--check-height"));
}

#[test]
fn test_cli_version() {
    let mut cmd = bomguard();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_check_valid_file() {
    let mut cmd = bomguard();
    let path = fixtures_dir().join("valid_design.sch");

    cmd.arg("--check-height").arg(path);

    cmd.assert()
        .success()
        .stdout("All checks passed!\n");
}

#[test]
fn test_cli_check_violations() {
    let mut cmd = bomguard();
    let path = fixtures_dir().join("bom_violations.sch");

    cmd.arg(path);

    cmd.assert().code(1).stdout(
        "[missing-empty-part-number] Found part group C0402-100n (value: 100n) with missing or empty part numbers: C1, C2\n\
         [uniqueness] Found part group R0402-10k (value: 10k) with two or more part numbers in use: R-10K-A, R-10K-B\n",
    );
}

#[test]
fn test_cli_check_height_short_flag() {
    let mut cmd = bomguard();
    let path = fixtures_dir().join("bom_violations.sch");

    cmd.arg("-z").arg(path);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains(
            "[part-height] Part C1 missed HEIGHT attribute or empty!",
        ))
        .stdout(predicate::str::contains(
            "[part-height] Part J1 missed HEIGHT attribute or empty!",
        ));
}

#[test]
fn test_cli_height_off_by_default() {
    let mut cmd = bomguard();
    let path = fixtures_dir().join("bom_violations.sch");

    cmd.arg(path);

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("part-height").not());
}

#[test]
fn test_cli_json_output() {
    let mut cmd = bomguard();
    let path = fixtures_dir().join("bom_violations.sch");

    cmd.arg(path).arg("--format").arg("json");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("\"passed\": false"))
        .stdout(predicate::str::contains("\"rule_id\": \"uniqueness\""));
}

#[test]
fn test_cli_github_format() {
    let mut cmd = bomguard();
    let path = fixtures_dir().join("bom_violations.sch");

    cmd.arg(path).arg("--format").arg("github");

    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("::error file="))
        .stdout(predicate::str::contains("[uniqueness]"));
}

#[test]
fn test_cli_check_nonexistent_file() {
    let mut cmd = bomguard();

    cmd.arg("does_not_exist.sch");

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_cli_check_malformed_file() {
    let mut cmd = bomguard();
    let path = fixtures_dir().join("malformed.sch");

    cmd.arg(path);

    cmd.assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_cli_missing_argument() {
    let mut cmd = bomguard();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_check_temp_file_without_parts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.sch");
    std::fs::write(&path, "<eagle><drawing><schematic/></drawing></eagle>").unwrap();

    let mut cmd = bomguard();
    cmd.arg(&path);

    cmd.assert().success().stdout("All checks passed!\n");
}

#[test]
fn test_lookup_match() {
    let mut cmd = bomguard_lookup();
    let path = fixtures_dir().join("bom_violations.sch");

    cmd.arg(path).arg("R0402");

    cmd.assert().success().stdout(
        "Found matching part triple 'R0402-10k (value: 10k)', which has the following part numbers:\n  - R-10K-A\n  - R-10K-B\n",
    );
}

#[test]
fn test_lookup_no_match() {
    let mut cmd = bomguard_lookup();
    let path = fixtures_dir().join("bom_violations.sch");

    cmd.arg(path).arg("does-not-match");

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_lookup_wrong_argument_count() {
    let mut cmd = bomguard_lookup();
    let path = fixtures_dir().join("bom_violations.sch");

    cmd.arg(path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("PART_TRIPLE"));
}
