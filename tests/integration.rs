//! End-to-end integration tests for the harness
//!
//! These tests run the focus-hil binary against the mock-focus device
//! emulator, covering the built-in scenario, YAML scenario files, and the
//! send passthrough. Each test gets its own state file so they can run in
//! parallel.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn focus_hil() -> &'static str {
    env!("CARGO_BIN_EXE_focus-hil")
}

fn mock_focus() -> &'static str {
    env!("CARGO_BIN_EXE_mock_focus")
}

struct HarnessOutput {
    stdout: String,
    stderr: String,
    code: i32,
}

/// Run focus-hil pointed at the mock device, with state under `dir`
fn run_harness(dir: &Path, args: &[&str]) -> HarnessOutput {
    let output: Output = Command::new(focus_hil())
        .args(args)
        .args(["--focus-bin", mock_focus()])
        .env("MOCK_FOCUS_STATE", dir.join("state"))
        .output()
        .expect("Failed to run focus-hil");

    HarnessOutput {
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        code: output.status.code().unwrap_or(-1),
    }
}

#[test]
fn builtin_scenario_passes_against_mock_device() {
    let dir = TempDir::new().unwrap();

    let out = run_harness(dir.path(), &["run", "--settle-secs", "0"]);

    assert_eq!(
        out.code, 0,
        "run failed\nstdout: {}\nstderr: {}",
        out.stdout, out.stderr
    );
    assert!(out.stdout.contains("Scenario Passed"));
    assert!(out.stdout.contains("spacecadet-mode-persistence"));

    // The scenario leaves the device in its factory state
    assert_eq!(fs::read_to_string(dir.path().join("state")).unwrap(), "1");
}

#[test]
fn builtin_scenario_reports_json() {
    let dir = TempDir::new().unwrap();

    let out = run_harness(dir.path(), &["run", "--settle-secs", "0", "--json"]);
    assert_eq!(out.code, 0, "stderr: {}", out.stderr);

    let json_start = out.stdout.find('{').expect("no JSON in output");
    let report: serde_json::Value = serde_json::from_str(&out.stdout[json_start..]).unwrap();

    assert_eq!(report["name"], "spacecadet-mode-persistence");
    assert_eq!(report["passed"], true);
    assert_eq!(report["steps_run"], report["steps_total"]);
    assert!(report["error"].is_null());
}

#[test]
fn yaml_scenario_runs_from_file() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("roundtrip.yaml");
    fs::write(
        &scenario,
        r#"
name: mode-roundtrip
steps:
  - action: send
    command: spacecadet.mode 0
    must_succeed: true
  - action: expect_value
    command: spacecadet.mode
    value: "0"
  - action: expect_reject
    command: device.reset
  - action: expect_value
    command: spacecadet.mode
    value: "0"
"#,
    )
    .unwrap();

    let out = run_harness(
        dir.path(),
        &["run", scenario.to_str().unwrap(), "--settle-secs", "0"],
    );

    assert_eq!(out.code, 0, "stderr: {}", out.stderr);
    assert!(out.stdout.contains("mode-roundtrip"));
}

#[test]
fn failing_assertion_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("wrong.yaml");
    fs::write(
        &scenario,
        r#"
name: wrong-expectation
steps:
  - action: expect_value
    command: spacecadet.mode
    value: "0"
    message: fresh device should read '0'
"#,
    )
    .unwrap();

    let out = run_harness(
        dir.path(),
        &["run", scenario.to_str().unwrap(), "--settle-secs", "0"],
    );

    assert_eq!(out.code, 1);
    assert!(out.stdout.contains("fresh device should read '0'"));
}

#[test]
fn malformed_scenario_is_a_harness_error() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("bad.yaml");
    fs::write(&scenario, "name: bad\nsteps:\n  - action: explode\n").unwrap();

    let out = run_harness(dir.path(), &["run", scenario.to_str().unwrap()]);

    assert_eq!(out.code, 2);
    assert!(out.stderr.contains("Scenario error"));
}

#[test]
fn send_passes_device_reply_and_exit_code_through() {
    let dir = TempDir::new().unwrap();

    let out = run_harness(dir.path(), &["send", "version"]);
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "0.4.1");

    // Write then read the mode back
    let out = run_harness(dir.path(), &["send", "spacecadet.mode 0"]);
    assert_eq!(out.code, 0);

    let out = run_harness(dir.path(), &["send", "spacecadet.mode"]);
    assert_eq!(out.code, 0);
    assert_eq!(out.stdout.trim(), "0");

    // Protected operations are refused, and --quiet drops their stderr
    let out = run_harness(dir.path(), &["send", "eeprom.erase", "--quiet"]);
    assert_eq!(out.code, 1);
    assert!(out.stderr.is_empty(), "stderr: {}", out.stderr);
}

#[test]
fn check_reports_device_presence() {
    let dir = TempDir::new().unwrap();

    let out = run_harness(dir.path(), &["check"]);
    assert_eq!(out.code, 0);
    assert!(out.stdout.contains("0.4.1"));
}

#[test]
fn missing_focus_binary_is_an_error() {
    let output = Command::new(focus_hil())
        .args(["send", "version", "--focus-bin", "/nonexistent/focus"])
        .output()
        .expect("Failed to run focus-hil");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"));
}
