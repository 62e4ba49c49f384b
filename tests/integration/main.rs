//! Integration tests for the schemadiff CLI
//!
//! These tests run the binary against schema documents on disk and check
//! the rendered findings and exit codes.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a schemadiff command
fn schemadiff() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("schemadiff"));
    // Keep user config out of the way
    cmd.env("XDG_CONFIG_HOME", "/nonexistent").env("HOME", "/nonexistent");
    cmd
}

/// Helper to write a document into a temp dir
fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

const OLD: &str = "\
tasks.send_email:
- name: to
- name: subject
tasks.legacy: []
";

const NEW_COMPATIBLE: &str = "\
tasks.send_email:
- name: to
- name: subject
- name: cc
  default: None
tasks.legacy: []
";

const NEW_BREAKING: &str = "\
tasks.send_email:
- name: recipient
- name: subject
- name: body
tasks.resize: []
";

// =============================================================================
// Basics
// =============================================================================

#[test]
fn test_version() {
    schemadiff()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("schemadiff"));
}

#[test]
fn test_help() {
    schemadiff()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compare two task-schema documents"));
}

#[test]
fn test_no_args_shows_version() {
    schemadiff().assert().success().stdout(predicate::str::contains("schemadiff"));
}

// =============================================================================
// diff
// =============================================================================

#[test]
fn test_identical_schemas_pass() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);

    schemadiff()
        .arg("diff")
        .arg(&old)
        .arg(&old)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Schemas are identical."));
}

#[test]
fn test_compatible_change_passes_with_info() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);
    let new = write(temp.path(), "new.yaml", NEW_COMPATIBLE);

    schemadiff()
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[INFO] tasks.send_email: new argument cc with default value: None",
        ));
}

#[test]
fn test_breaking_change_fails() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);
    let new = write(temp.path(), "new.yaml", NEW_BREAKING);

    schemadiff()
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[WARNING] tasks.resize: added task: tasks.resize"))
        .stdout(predicate::str::contains(
            "[ERROR] tasks.send_email: argument to was replaced with recipient",
        ))
        .stdout(predicate::str::contains(
            "[ERROR] tasks.send_email: new argument body without default value",
        ))
        .stdout(predicate::str::contains("[WARNING] tasks.legacy: removed task: tasks.legacy"));
}

#[test]
fn test_fail_on_never() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);
    let new = write(temp.path(), "new.yaml", NEW_BREAKING);

    schemadiff()
        .args(["diff", "--fail-on", "never"])
        .arg(&old)
        .arg(&new)
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn test_project_config_threshold() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);
    let new = write(temp.path(), "new.yaml", NEW_COMPATIBLE);
    write(temp.path(), "schemadiff.toml", "[report]\nfail_on = \"info\"\n");

    schemadiff()
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .current_dir(temp.path())
        .assert()
        .code(1);
}

#[test]
fn test_quiet_hides_info() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);
    let new = write(temp.path(), "new.yaml", NEW_COMPATIBLE);

    schemadiff()
        .args(["diff", "--quiet"])
        .arg(&old)
        .arg(&new)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[INFO]").not());
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);
    let new = write(temp.path(), "new.json", r#"{"tasks.legacy": []}"#);

    let output = schemadiff()
        .args(["--json", "diff"])
        .arg(&old)
        .arg(&new)
        .current_dir(temp.path())
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["summary"]["warning"], 1);
    assert_eq!(json["tasks"][0]["task"], "tasks.send_email");
    assert_eq!(json["tasks"][0]["change"], "removed");
}

#[test]
fn test_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);

    schemadiff()
        .arg("diff")
        .arg(&old)
        .arg(temp.path().join("missing.yaml"))
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.yaml"));
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn test_validate_reports_task_count() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);

    schemadiff()
        .arg("validate")
        .arg(&old)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 task(s)"));
}

#[test]
fn test_validate_rejects_malformed() {
    let temp = TempDir::new().unwrap();
    let bad = write(temp.path(), "bad.yaml", "t:\n- kind: keyword_only\n");

    schemadiff()
        .arg("validate")
        .arg(&bad)
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad.yaml"));
}

#[test]
fn test_broken_config_only_affects_diff() {
    let temp = TempDir::new().unwrap();
    let old = write(temp.path(), "old.yaml", OLD);
    let new = write(temp.path(), "new.yaml", NEW_COMPATIBLE);
    write(temp.path(), "schemadiff.toml", "[report]\nfail_on = \"loudly\"\n");

    schemadiff().arg("version").current_dir(temp.path()).assert().success();

    schemadiff()
        .arg("validate")
        .arg(&old)
        .current_dir(temp.path())
        .assert()
        .success();

    schemadiff()
        .arg("diff")
        .arg(&old)
        .arg(&new)
        .current_dir(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid config"));
}
