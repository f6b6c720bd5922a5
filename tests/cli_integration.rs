/// End-to-end tests for the clarity-mock binary.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clarity-mock"));
    cmd.current_dir(env!("CARGO_MANIFEST_DIR")).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_command() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("call"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("scenario"));
}

#[test]
fn test_version_command() {
    cmd().arg("--version").assert().success();
}

#[test]
fn test_call_register_property() {
    cmd()
        .args(["call", "--function", "register-property"])
        .args(["--args", r#"["123 Main St", "Commercial office space"]"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ok u1)"));
}

#[test]
fn test_call_json_output() {
    let output = cmd()
        .args(["call", "--function", "get-property", "--args", "[1]", "--json"])
        .args(["--sender", "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(
        value["result"]["owner"],
        "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG"
    );
    assert_eq!(value["result"]["condition-score"], 8);
}

#[test]
fn test_call_unknown_function() {
    cmd()
        .args(["--quiet", "call", "--function", "nonexistent-op"])
        .assert()
        .success()
        .stdout(predicate::str::diff("(err u999)\n"));
}

#[test]
fn test_call_with_mock() {
    cmd()
        .args(["--quiet", "call", "--contract", "token", "--function", "get-balance"])
        .args(["--mock", "token.get-balance=u500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(ok u500)"));
}

#[test]
fn test_call_rejects_bad_args() {
    cmd()
        .args(["call", "--function", "verify-property", "--args", "{\"id\": 1}"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn test_call_rejects_lower_block_height() {
    cmd()
        .args(["call", "--function", "verify-property", "--block-height", "5"])
        .assert()
        .failure();
}

#[test]
fn test_validate_bundled_contract() {
    cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("define-map properties"));
}

#[test]
fn test_validate_reports_missing_marker() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("broken.clar");
    fs::write(&source, "(define-map properties { id: uint } { owner: principal })").unwrap();

    cmd()
        .args(["validate", "--source"])
        .arg(&source)
        .assert()
        .failure()
        .stderr(predicate::str::contains("define-public (register-property"));
}

#[test]
fn test_validate_missing_file() {
    cmd()
        .args(["validate", "--source", "contracts/does-not-exist.clar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read contract source"))
        .stderr(predicate::str::contains("file_error"));
}

#[test]
fn test_validate_json_output() {
    let output = cmd().args(["validate", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["result"]["found"].as_array().unwrap().len(), 3);
}

#[test]
fn test_validate_json_missing_file() {
    let output = cmd()
        .args(["validate", "--json", "--source", "contracts/does-not-exist.clar"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], "error");
    assert!(value["result"].is_null());
    assert!(value["errors"][0]
        .as_str()
        .unwrap()
        .contains("Failed to read contract source"));
}

#[test]
fn test_call_json_with_oversized_error_code() {
    let output = cmd()
        .args(["call", "--contract", "t", "--function", "f", "--json"])
        .args(["--mock", "t.f=(err u18446744073709551616)"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["result"]["type"], "err");
    assert_eq!(value["result"]["value"], "18446744073709551616");
}

#[test]
fn test_call_verbose_lists_arguments() {
    cmd()
        .args(["--verbose", "call", "--function", "verify-property", "--args", "[1, 8]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arg 0: 1"))
        .stdout(predicate::str::contains("arg 1: 8"));
}

#[test]
fn test_call_normal_mode_hides_arguments() {
    cmd()
        .args(["call", "--function", "verify-property", "--args", "[1, 8]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("arg 0").not());
}

#[test]
fn test_scenario_passes() {
    cmd()
        .args(["scenario", "--file", "tests/fixtures/scenarios/property_verification.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All scenario steps passed"));
}

#[test]
fn test_scenario_failure_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let scenario = dir.path().join("failing.toml");
    fs::write(
        &scenario,
        "[[steps]]\nfunction = \"verify-property\"\nexpected = '{\"type\": \"err\"}'\n",
    )
    .unwrap();

    cmd()
        .args(["scenario", "--file"])
        .arg(&scenario)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Step 1 failed"));
}

#[test]
fn test_completions() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clarity-mock"));
}
