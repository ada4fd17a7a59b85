//! CLI Integration Tests
//!
//! Tests the CLI binary directly using assert_cmd to exercise main.rs code paths.

#![cfg(not(coverage))]
#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn portfolio() -> Command {
    let mut cmd = Command::cargo_bin("portfolio").unwrap();
    cmd.env_remove("PORTFOLIO_DATA")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    portfolio()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    portfolio()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("portfolio"));
}

#[test]
fn test_build_help_lists_modes() {
    portfolio()
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("static"))
        .stdout(predicate::str::contains("live"));
}

#[test]
fn test_unknown_quick_wins_mode() {
    portfolio()
        .args(["build", "--quick-wins", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// ═══════════════════════════════════════════════════════════════════════════
// BUILD / SCRIPT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_build_default_dataset() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out/Agent_Portfolio.xlsx");

    portfolio()
        .args(["build", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Build Complete"))
        .stdout(predicate::str::contains("39 agents across 9 categories"));

    assert!(output.exists());
}

#[test]
fn test_build_verbose_live() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("live.xlsx");

    portfolio()
        .args(["build", "--quick-wins", "live", "--verbose", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("live FILTER formula"))
        .stdout(predicate::str::contains("Laying out sheets"));
}

#[test]
fn test_build_missing_data_fails() {
    let temp_dir = TempDir::new().unwrap();

    portfolio()
        .current_dir(temp_dir.path())
        .args(["build", "--data", "nope.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.yaml"));

    assert!(!temp_dir.path().join("sheets").exists());
}

#[test]
fn test_script_writes_default_path() {
    let temp_dir = TempDir::new().unwrap();

    portfolio()
        .current_dir(temp_dir.path())
        .arg("script")
        .assert()
        .success()
        .stdout(predicate::str::contains("buildAgentForce"));

    let source = fs::read_to_string(temp_dir.path().join("agents-sheet.gs")).unwrap();
    assert!(source.contains("function buildAgentForce()"));
    assert!(source.contains("=FILTER('Agent Portfolio'!A7:J62"));
}

// ═══════════════════════════════════════════════════════════════════════════
// INIT / DATA FILES
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_init_then_build_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("mine.yaml");
    let output = temp_dir.path().join("mine.xlsx");

    portfolio()
        .args(["init", "-o"])
        .arg(&data)
        .assert()
        .success();

    portfolio()
        .env("PORTFOLIO_DATA", &data)
        .args(["build", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("mine.yaml"));

    portfolio()
        .arg("inspect")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Agent Portfolio"));
}

#[test]
fn test_init_refuses_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("portfolio.yaml");
    fs::write(&data, "mine").unwrap();

    portfolio()
        .args(["init", "-o"])
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    portfolio()
        .args(["init", "--force", "-o"])
        .arg(&data)
        .assert()
        .success();
}

#[test]
fn test_invalid_yaml_reports_error() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("bad.yaml");
    fs::write(&data, "title: [unclosed").unwrap();

    portfolio()
        .args(["summary", "--data"])
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Yaml"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SUMMARY / INSPECT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_summary_table() {
    portfolio()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total agents: 39"))
        .stdout(predicate::str::contains("By complexity"));
}

#[test]
fn test_summary_json() {
    let output = portfolio()
        .args(["summary", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["total"], 39);
    assert_eq!(json["quick_wins"], 19);
    assert_eq!(json["by_category"].as_array().unwrap().len(), 9);
}

#[test]
fn test_inspect_built_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("book.xlsx");

    portfolio().args(["build", "-o"]).arg(&output).assert().success();

    portfolio()
        .arg("inspect")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Quick Wins"))
        .stdout(predicate::str::contains("Build Roadmap"));
}

#[test]
fn test_inspect_missing_file() {
    portfolio()
        .args(["inspect", "does-not-exist.xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.xlsx"));
}
