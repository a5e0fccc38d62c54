//! Smoke tests to verify CLI wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_bind_flag() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_help_lists_database_flags() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("MongoDB connection string"))
        .stdout(predicate::str::contains("Database name"));
}

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("newsdesk").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("newsdesk"));
}
