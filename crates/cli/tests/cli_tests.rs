use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("viewer-count").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Serve aggregate viewer counts"))
        .stdout(predicate::str::contains("<CONFIG>"));
}

#[test]
fn test_cli_requires_config_argument() {
    let mut cmd = Command::cargo_bin("viewer-count").unwrap();
    cmd.assert().failure().stderr(predicate::str::contains("<CONFIG>"));
}

#[test]
fn test_cli_rejects_extra_arguments() {
    let mut cmd = Command::cargo_bin("viewer-count").unwrap();
    cmd.args(["a.json", "b.json"]).assert().failure();
}

#[test]
fn test_cli_missing_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("viewer-count").unwrap();
    cmd.arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn test_cli_invalid_port() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"port": 0, "db_connection_string": "postgres://localhost/viewers"}}"#)
        .unwrap();
    let mut cmd = Command::cargo_bin("viewer-count").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("the port must be between 1 and 65535"));
}

#[test]
fn test_cli_unparsable_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "port = 8080").unwrap();
    let mut cmd = Command::cargo_bin("viewer-count").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse config file"));
}
