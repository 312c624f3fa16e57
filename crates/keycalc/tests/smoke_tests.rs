//! Smoke tests for the keycalc binary
//!
//! Only the batch `eval` mode is driven here; the interactive mode needs a
//! real terminal and is covered by the in-crate event loop tests.

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Get a command for the keycalc binary
fn keycalc() -> Command {
    let mut cmd = Command::cargo_bin("keycalc").expect("keycalc binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn config_file(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{yaml}").unwrap();
    file
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keycalc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.4.0"));
}

#[test]
fn test_help_flag() {
    keycalc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("eval"))
        .stdout(predicate::str::contains("tui"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_eval_requires_keys() {
    keycalc().arg("eval").assert().failure();
}

// ============================================================================
// Eval
// ============================================================================

#[test]
fn test_eval_addition() {
    keycalc()
        .args(["eval", "3", "+", "4", "="])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn test_eval_chain_without_precedence() {
    keycalc()
        .args(["eval", "2", "+", "3", "*", "4", "="])
        .assert()
        .success()
        .stdout("20\n");
}

#[test]
fn test_eval_number_literals_expand() {
    keycalc()
        .args(["eval", "0.1", "+", "0.2", "="])
        .assert()
        .success()
        .stdout("0.30000000000000004\n");
}

#[test]
fn test_eval_division_by_zero() {
    keycalc()
        .args(["eval", "5", "/", "0", "="])
        .assert()
        .success()
        .stdout("Infinity\n");
}

#[test]
fn test_eval_exponent_form() {
    keycalc()
        .args(["eval", "10000000000", "sq", "sq"])
        .assert()
        .success()
        .stdout("1e+40\n");
}

#[test]
fn test_eval_unary_and_memory() {
    keycalc()
        .args(["eval", "1", "6", "sqrt", "m+", "c", "9", "+", "mr", "="])
        .assert()
        .success()
        .stdout("13\n");
}

#[test]
fn test_eval_unknown_token_fails() {
    keycalc()
        .args(["eval", "3", "+", "banana"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Unknown key: 'banana'"));
}

#[test]
fn test_eval_json() {
    keycalc()
        .args(["eval", "--json", "8", "-", "2", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"display\":\"6\""))
        .stdout(predicate::str::contains("\"pending_operator\":null"))
        .stdout(predicate::str::contains("\"overwrite\":true"));
}

#[test]
fn test_eval_json_pending_state() {
    keycalc()
        .args(["eval", "--json", "8", "*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"pending_operand\":\"8\""))
        .stdout(predicate::str::contains("\"pending_operator\":\"Multiply\""));
}

#[test]
fn test_eval_tape() {
    keycalc()
        .args(["eval", "--tape", "2", "+", "2", "=", "x", "3", "="])
        .assert()
        .success()
        .stdout("2 + 2 = 4\n4 * 3 = 12\n12\n");
}

#[test]
fn test_eval_tape_empty() {
    keycalc()
        .args(["eval", "--tape", "2", "+", "2"])
        .assert()
        .success()
        .stdout("2\n");
}

// ============================================================================
// Configuration and logging
// ============================================================================

#[test]
fn test_config_tape_capacity() {
    let config = config_file("tape_capacity: 1\n");
    keycalc()
        .arg("--config")
        .arg(config.path())
        .args(["eval", "--tape", "2", "+", "2", "=", "x", "3", "="])
        .assert()
        .success()
        .stdout("4 * 3 = 12\n12\n");
}

#[test]
fn test_config_unknown_field_fails() {
    let config = config_file("tape_length: 1\n");
    keycalc()
        .arg("--config")
        .arg(config.path())
        .args(["eval", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("YAML error"));
}

#[test]
fn test_config_missing_file_fails() {
    keycalc()
        .args(["--config", "/definitely/not/here.yaml", "eval", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_quiet_keeps_stderr_clean() {
    keycalc()
        .args(["-q", "eval", "4", "sqrt"])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_trace_logs_transitions() {
    keycalc()
        .args(["-vv", "eval", "1", "+", "1", "="])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::contains("transition"))
        .stderr(predicate::str::contains("evaluate"));
}

#[test]
fn test_config_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("keycalc.log");
    let config = config_file(&format!("log_level: debug\nlog_file: {}\n", log.display()));
    keycalc()
        .arg("--config")
        .arg(config.path())
        .args(["eval", "6", "/", "3", "="])
        .assert()
        .success()
        .stdout("2\n")
        .stderr(predicate::str::is_empty());
    let written = std::fs::read_to_string(&log).unwrap();
    assert!(written.contains("evaluate"));
}
