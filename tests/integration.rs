// Integration tests for the compass CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the compass binary.
fn compass() -> Command {
    Command::cargo_bin("compass").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    compass()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("compass"));
}

#[test]
fn cli_help_flag() {
    compass()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Elective pathway"));
}

#[test]
fn quiz_requires_an_answer_source() {
    compass()
        .arg("quiz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiz_rejects_both_answer_sources() {
    // --answers and --answers-file are mutually exclusive
    compass()
        .args(["quiz", "--answers", &"2".repeat(30), "--answers-file", "a.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn traits_requires_a_value_source() {
    compass()
        .arg("traits")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiz_rejects_malformed_answer_string() {
    compass()
        .args(["quiz", "--answers", "212"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("answer input error"));
}

#[test]
fn traits_rejects_out_of_range_values() {
    compass()
        .args(["traits", "--values", "11,5,5,5,5,5,5,5,5,5,5,5,5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("trait input error"));
}

#[test]
fn catalog_prints_questions_and_traits() {
    compass()
        .args(["catalog"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Have you ever taken a pen apart?"))
        .stdout(predicate::str::contains("mechanical"));
}

#[test]
fn catalog_json_is_structured() {
    compass()
        .args(["catalog", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"questions\""))
        .stdout(predicate::str::contains("\"traits\""));
}
