//! End-to-end tests for the escalera fixture binary
#![allow(deprecated)] // suppress assert_cmd::Command::cargo_bin deprecation in tests
//!
//! Goal: escalera --delay-secs 0 runs the full chain and exits silently

use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

#[test]
fn test_cli_help() {
    // Test that --help works
    let mut cmd = Command::cargo_bin("escalera").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--delay-secs"));
}

#[test]
fn test_chain_runs_to_completion_with_zero_delay() {
    // The chain itself is synchronous and fast; with the attach window
    // disabled the process must finish well inside the timeout.
    let mut cmd = Command::cargo_bin("escalera").unwrap();
    cmd.arg("--delay-secs")
        .arg("0")
        .timeout(Duration::from_secs(10))
        .assert()
        .success();
}

#[test]
fn test_default_run_produces_no_output() {
    // Diagnostic printing is permanently disabled; the only observable
    // effect of a run is the call/return events themselves.
    let mut cmd = Command::cargo_bin("escalera").unwrap();
    cmd.arg("--delay-secs")
        .arg("0")
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_debug_logging_goes_to_stderr_only() {
    let mut cmd = Command::cargo_bin("escalera").unwrap();
    cmd.arg("--delay-secs")
        .arg("0")
        .arg("--debug")
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("starting dispatch chain"))
        .stderr(predicate::str::contains("dispatch chain returned"));
}

#[test]
fn test_rejects_unknown_arguments() {
    let mut cmd = Command::cargo_bin("escalera").unwrap();
    cmd.arg("--no-such-flag").assert().failure();
}
