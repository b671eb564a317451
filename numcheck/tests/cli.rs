//! Integration tests for the numcheck binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from any config file in the working directory or
/// the user's home.
fn numcheck(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("numcheck").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("NUMCHECK_CONFIG")
        .env_remove("NUMCHECK_VERBOSE")
        .env("NUMCHECK_NO_COLOR", "true");
    cmd
}

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("scan"));
}

#[test]
fn test_check_all_valid() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .args(["check", "0xFF", "1'000", "-42", "6.022e23"])
        .assert()
        .success()
        .stdout("0xFF: valid integer\n1'000: valid integer\n-42: valid integer\n6.022e23: valid float\n");
}

#[test]
fn test_check_invalid_fails() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .args(["check", "0b102", "7"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("0b102: invalid"))
        .stdout(predicate::str::contains("7: valid integer"))
        .stderr(predicate::str::contains("1 of 2 literals rejected"));
}

#[test]
fn test_check_json() {
    let dir = TempDir::new().unwrap();
    let output = numcheck(&dir)
        .args(["check", "--json", "1.5"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["literal"], "1.5");
    assert_eq!(value[0]["kind"], "float");
}

#[test]
fn test_parse_values() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .args(["parse", "0x2A", "-7", "0x1.8p1"])
        .assert()
        .success()
        .stdout("0x2A = 42 (u64)\n-7 = -7 (i64)\n0x1.8p1 = 3.0 (f64)\n");
}

#[test]
fn test_parse_overflow_reports_code() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .args(["parse", "18446744073709551616"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("error[E1005]"))
        .stdout(predicate::str::contains("= help:"));
}

#[test]
fn test_parse_float_flag() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .args(["parse", "--float", "2"])
        .assert()
        .success()
        .stdout("2 = 2.0 (f64)\n");
}

#[test]
fn test_parse_unsigned_rejects_sign() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .args(["parse", "--unsigned", "--", "-1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("error[E1003]"));
}

#[test]
fn test_scan_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("numbers.txt");
    fs::write(&path, "1, 0x10; 2.5\n0o9\n").unwrap();

    numcheck(&dir)
        .arg("scan")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("1:1\tinteger\t1"))
        .stdout(predicate::str::contains("1:4\tinteger\t16"))
        .stdout(predicate::str::contains("1:10\tfloat\t2.5"))
        .stdout(predicate::str::contains("2:1\tinvalid"))
        .stderr(predicate::str::contains("error[E1003]"))
        .stderr(predicate::str::contains("--> 2:1"));
}

#[test]
fn test_scan_stdin_clean() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .arg("scan")
        .write_stdin("42 0b1010\n")
        .assert()
        .success()
        .stdout("1:1\tinteger\t42\n1:4\tinteger\t10\n");
}

#[test]
fn test_scan_json() {
    let dir = TempDir::new().unwrap();
    let output = numcheck(&dir)
        .args(["scan", "--json"])
        .write_stdin("1e3 @")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tokens"][0]["value"], 1000.0);
    assert_eq!(value["diagnostics"][0]["code"], "E1001");
    assert_eq!(value["errors"], 1);
}

#[test]
fn test_scan_missing_file() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .args(["scan", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("NotFound"));
}

#[test]
fn test_config_in_current_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("numcheck.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let output = numcheck(&dir).args(["check", "1"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["valid"], true);
}

#[test]
fn test_config_lexer_options() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[lexer]\nsigned_integers = false\n").unwrap();

    numcheck(&dir)
        .arg("--config")
        .arg(&config)
        .arg("scan")
        .write_stdin("-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("E1001"));
}

#[test]
fn test_missing_named_config() {
    let dir = TempDir::new().unwrap();
    numcheck(&dir)
        .args(["--config", "nope.toml", "check", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}
