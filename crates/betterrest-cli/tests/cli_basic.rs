//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Each run gets
//! its own HOME, so config files never leak between tests or from the
//! developer's machine.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run a CLI command with `home` as HOME and return (stdout, stderr, exit code).
fn run_cli_in(home: &Path, args: &[&str]) -> (String, String, i32) {
    let real_home = PathBuf::from(std::env::var("HOME").unwrap_or_default());
    let rustup_home = std::env::var("RUSTUP_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| real_home.join(".rustup"));
    let cargo_home = std::env::var("CARGO_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| real_home.join(".cargo"));

    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "betterrest-cli", "--"])
        .args(args)
        .env("HOME", home)
        .env("RUSTUP_HOME", rustup_home)
        .env("CARGO_HOME", cargo_home)
        .env("BETTERREST_ENV", "dev")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run a CLI command against a fresh, empty HOME.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let home = TempDir::new().expect("temp HOME");
    run_cli_in(home.path(), args)
}

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
        .display()
        .to_string()
}

#[test]
fn test_estimate_seven_am_eight_hours() {
    let model = fixture("linear_model.toml");
    let (stdout, _, code) = run_cli(&[
        "estimate", "--wake", "07:00", "--sleep", "8", "--coffee", "1", "--model", &model,
        "--style", "12h",
    ]);
    assert_eq!(code, 0, "estimate failed: {stdout}");
    assert!(stdout.contains("Your ideal bedtime is..."));
    assert!(stdout.contains("11:00 PM"));
}

#[test]
fn test_estimate_24_hour_style() {
    let model = fixture("linear_model.toml");
    let (stdout, _, code) = run_cli(&[
        "estimate", "--wake", "07:00", "--sleep", "8", "--coffee", "3", "--model", &model,
        "--style", "24h",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("22:50"));
}

#[test]
fn test_estimate_json() {
    let model = fixture("linear_model.toml");
    let (stdout, _, code) = run_cli(&[
        "estimate", "--wake", "6:30 AM", "--sleep", "7.5", "--coffee", "1", "--model", &model,
        "--style", "24h", "--json",
    ]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed["wake_time"], "06:30");
    assert_eq!(parsed["coffee"], 1);
    assert_eq!(parsed["recommendation"]["status"], "bedtime");
    assert_eq!(parsed["recommendation"]["bedtime"], "23:00");
}

#[test]
fn test_estimate_broken_model_shows_error_message() {
    let model = fixture("broken_model.toml");
    let (stdout, _, code) = run_cli(&["estimate", "--model", &model]);
    assert_eq!(code, 1);
    assert!(stdout.contains("Error"));
    assert!(stdout.contains("Sorry, there was a problem calculating your bedtime."));
}

#[test]
fn test_estimate_missing_model_shows_error_message() {
    let (stdout, _, code) = run_cli(&["estimate", "--model", "/nonexistent/model.toml"]);
    assert_eq!(code, 1);
    assert!(stdout.contains("Sorry, there was a problem calculating your bedtime."));
}

#[test]
fn test_estimate_rejects_out_of_range_inputs() {
    let model = fixture("linear_model.toml");
    let (_, stderr, code) = run_cli(&["estimate", "--sleep", "13", "--model", &model]);
    assert_ne!(code, 0);
    assert!(stderr.contains("sleep goal"));

    let (_, stderr, code) = run_cli(&["estimate", "--coffee", "0", "--model", &model]);
    assert_ne!(code, 0);
    assert!(stderr.contains("coffee"));
}

#[test]
fn test_inputs_lists_choices() {
    let (stdout, _, code) = run_cli(&["inputs"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("4 hours"));
    assert!(stdout.contains("12 hours"));
    assert!(stdout.contains("1 cup"));
    assert!(stdout.contains("19 cups"));
}

#[test]
fn test_model_show() {
    let model = fixture("linear_model.toml");
    let (stdout, _, code) = run_cli(&["model", "show", "--model", &model]);
    assert_eq!(code, 0);
    assert!(stdout.contains("SleepCalculatorFixture"));
}

#[test]
fn test_model_predict() {
    let model = fixture("linear_model.toml");
    let (stdout, _, code) = run_cli(&[
        "model", "predict", "--model", &model, "--wake", "07:00", "--sleep", "8", "--coffee", "1",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("28800s (8h 00m)"));
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "display.nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn test_config_list_is_json() {
    let (stdout, _, code) = run_cli(&["config", "list"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert!(parsed.get("display").is_some());
    assert!(parsed.get("defaults").is_some());
}

#[test]
fn test_model_predict_accepts_negative_sleep() {
    let model = fixture("linear_model.toml");
    let (stdout, stderr, code) = run_cli(&[
        "model", "predict", "--model", &model, "--wake", "07:00", "--sleep", "-1", "--coffee", "1",
    ]);
    assert_eq!(code, 0, "predict failed: {stderr}");
    assert!(stdout.contains("-3600s (-1h 00m)"));
}

#[test]
fn test_config_set_rejects_bad_log_level() {
    let home = TempDir::new().unwrap();
    let (_, stderr, code) = run_cli_in(home.path(), &["config", "set", "logging.level", "garbage"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("logging.level"));

    let (stdout, stderr, code) = run_cli_in(home.path(), &["config", "get", "logging.level"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "warn");
    assert!(!stderr.contains("ignoring"));
}

#[test]
fn test_config_set_persists_within_home() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_cli_in(home.path(), &["config", "set", "display.time_style", "24h"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ok"));

    let (stdout, _, _) = run_cli_in(home.path(), &["config", "get", "display.time_style"]);
    assert_eq!(stdout.trim(), "24h");

    let (stdout, _, _) = run_cli(&["config", "get", "display.time_style"]);
    assert_eq!(stdout.trim(), "auto");
}
