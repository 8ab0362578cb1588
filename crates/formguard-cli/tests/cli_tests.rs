//! Integration tests for the formguard binary.

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// The binary with a deterministic environment: plain output, defaults only.
fn formguard() -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("formguard");
    cmd.env_remove("FORMGUARD_PASSWORD")
        .env_remove("FORMGUARD_CONFIRM_PASSWORD")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .env("FORMGUARD__OUTPUT__FORMAT", "plain");
    cmd
}

const VALID: [&str; 11] = [
    "validate",
    "--username",
    "alice",
    "--email",
    "a@abc.com",
    "--phone",
    "1234567890",
    "--password",
    "Abc1234&",
    "--confirm-password",
    "Abc1234&",
];

#[test]
fn valid_submission_exits_zero() {
    formguard()
        .args(VALID)
        .assert()
        .success()
        .stdout(predicate::str::contains("Username"))
        .stdout(predicate::str::contains("cannot be empty").not());
}

#[test]
fn empty_submission_is_rejected_with_every_message() {
    formguard()
        .arg("validate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Username cannot be empty."))
        .stdout(predicate::str::contains("Email cannot be empty."))
        .stdout(predicate::str::contains("Phone number cannot be empty."))
        .stdout(predicate::str::contains("Password cannot be empty."))
        .stdout(predicate::str::contains("Confirm Password cannot be empty."))
        .stderr(predicate::str::contains("Form rejected"));
}

#[test]
fn mismatch_is_reported_on_confirmation_only() {
    let mut args = VALID.to_vec();
    args[10] = "Abc1234";
    formguard()
        .args(args)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Passwords do not match."))
        .stdout(predicate::str::contains("Password must be at least").not())
        .stderr(predicate::str::contains("confirmPassword"));
}

#[test]
fn password_can_come_from_the_environment() {
    formguard()
        .args(&VALID[..7])
        .env("FORMGUARD_PASSWORD", "Abc1234&")
        .env("FORMGUARD_CONFIRM_PASSWORD", "Abc1234&")
        .assert()
        .success();
}

#[test]
fn json_output_is_the_result_document() {
    let assert = formguard()
        .args(["--output-format", "json", "validate", "--phone", "12345"])
        .assert()
        .code(2);

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(doc["isValid"], false);
    assert_eq!(
        doc["errors"]["phone"],
        "Phone number must be exactly 10 numeric digits."
    );
    assert_eq!(doc["errors"]["username"], "Username cannot be empty.");
}

#[test]
fn validates_a_submission_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signup.toml");
    fs::write(
        &path,
        r#"
username = "  alice  "
email = "user@abc.com"
phone = "1234567890"
password = "Abc1234&"
confirmPassword = "Abc1234&"
"#,
    )
    .unwrap();

    formguard()
        .args(["validate", "--input"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn flags_override_the_submission_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signup.json");
    fs::write(
        &path,
        r#"{"username":"alice","email":"user@abcd.com","phone":"1234567890",
            "password":"Abc1234&","confirmPassword":"Abc1234&"}"#,
    )
    .unwrap();

    formguard()
        .args(["validate", "--input"])
        .arg(&path)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Email must be in format"));

    formguard()
        .args(["validate", "--email", "user@abc.com", "--input"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn missing_submission_file_exits_three() {
    let dir = TempDir::new().unwrap();
    formguard()
        .args(["validate", "--input"])
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn unsupported_submission_format_exits_two() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("signup.yaml");
    fs::write(&path, "username: alice\n").unwrap();

    formguard()
        .args(["validate", "--input"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported submission format"));
}

#[test]
fn rules_describe_every_field() {
    formguard()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("confirmPassword"))
        .stdout(predicate::str::contains("exactly 10 digits"));
}

#[test]
fn rules_for_unknown_field_fails() {
    formguard()
        .args(["rules", "age"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown field 'age'"));
}

#[test]
fn config_set_then_get_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    formguard()
        .arg("--config")
        .arg(&path)
        .args(["config", "set", "report.show_passing", "false"])
        .assert()
        .success();

    formguard()
        .arg("--config")
        .arg(&path)
        .args(["config", "get", "report.show_passing"])
        .assert()
        .success()
        .stdout(predicate::str::diff("false\n"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    formguard()
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .args(["config", "set", "output.colour", "red"])
        .assert()
        .code(4);
}

#[test]
fn init_writes_a_loadable_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("formguard.toml");

    formguard()
        .arg("--config")
        .arg(&path)
        .arg("init")
        .assert()
        .success();
    assert!(path.exists());

    formguard()
        .arg("--config")
        .arg(&path)
        .args(VALID)
        .assert()
        .success();
}

#[test]
fn missing_explicit_config_exits_four() {
    let dir = TempDir::new().unwrap();
    formguard()
        .arg("--config")
        .arg(dir.path().join("nope.toml"))
        .arg("rules")
        .assert()
        .code(4);
}

#[test]
fn completions_are_generated() {
    formguard()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("formguard"));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    formguard().assert().code(2);
}

#[test]
fn any_no_color_value_is_accepted() {
    for value in ["1", "yes", "anything"] {
        formguard()
            .env("NO_COLOR", value)
            .args(VALID)
            .assert()
            .success();
    }
}
