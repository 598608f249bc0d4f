//! End-to-end tests for the matrixgen binary.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn matrixgen() -> Command {
    Command::cargo_bin("matrixgen").expect("matrixgen binary")
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let output = matrixgen().args(args).output().expect("run matrixgen");
    assert!(output.status.success(), "matrixgen {:?} failed", args);
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

fn include(value: &serde_json::Value) -> &Vec<serde_json::Value> {
    value["include"].as_array().expect("include array")
}

fn write_config(contents: &str) -> (TempDir, String) {
    let td = tempfile::tempdir().expect("tempdir");
    let path = td.path().join("matrix.toml");
    fs::write(&path, contents).unwrap();
    let path = path.to_str().expect("utf8 path").to_string();
    (td, path)
}

#[test]
fn test_no_args_prints_builtin_matrix() {
    let value = run_json(&[]);
    let records = include(&value);

    assert_eq!(value.as_object().unwrap().len(), 1);
    assert_eq!(records.len(), 15);
    assert_eq!(records[0]["platform"], "linux-x86_64");
    assert_eq!(records[0]["version"], "main");
    assert_eq!(records[0]["build_shared_libs"], "on");
    assert_eq!(records[0]["linkage"], "Dynamic");
    assert_eq!(records[14]["platform"], "macos-arm64");
    assert_eq!(records[14]["version"], "2.27.0");
    assert_eq!(records[14]["linkage"], "Static");
}

#[test]
fn test_no_args_output_is_byte_identical_across_runs() {
    let first = matrixgen().output().unwrap();
    let second = matrixgen().output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_no_args_writes_nothing_to_stderr() {
    matrixgen()
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let output = matrixgen().env("RUST_LOG", "debug").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("pure JSON");
    assert_eq!(include(&value).len(), 15);
    assert!(String::from_utf8_lossy(&output.stderr).contains("generated 15 combinations"));
}

#[test]
fn test_output_matches_schema() {
    let schema: serde_json::Value =
        serde_json::from_str(include_str!("../schemas/matrix.v1.json")).expect("schema json");
    let validator = jsonschema::validator_for(&schema).expect("valid schema");

    let cases: [&[&str]; 2] = [&[], &["--exclusion", "disabled"]];
    for args in cases {
        let value = run_json(args);
        let errors: Vec<String> = validator
            .iter_errors(&value)
            .map(|e| e.to_string())
            .collect();
        assert!(errors.is_empty(), "schema errors: {:?}", errors);
    }
}

#[test]
fn test_exclusion_disabled_builds_full_product() {
    let value = run_json(&["--exclusion", "disabled"]);
    let records = include(&value);
    assert_eq!(records.len(), 20);
    assert!(
        records
            .iter()
            .any(|r| r["version"] == "2.27.0" && r["linkage"] == "Dynamic")
    );
}

#[test]
fn test_invalid_exclusion_value() {
    matrixgen()
        .arg("--exclusion")
        .arg("sometimes")
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("invalid").or(predicate::str::contains("possible values")),
        );
}

#[test]
fn test_count_flag() {
    matrixgen().arg("--count").assert().success().stdout("15\n");
}

#[test]
fn test_version_ids_replace_versions() {
    let args = [
        "--version-id",
        "main",
        "--version-id",
        "2.26.1",
        "--version-id",
        "2.27.0",
    ];
    let value = run_json(&args);
    let records = include(&value);
    assert_eq!(records.len(), 20);
    assert_eq!(records[10]["version"], "2.26.1");
    assert_eq!(records[15]["version"], "2.27.0");
}

#[test]
fn test_duplicate_version_ids_fail() {
    matrixgen()
        .args(["--version-id", "main", "--version-id", "main"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("listed more than once"));
}

#[test]
fn test_markdown_format() {
    matrixgen()
        .args(["--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Build matrix"))
        .stdout(predicate::str::contains("- Combinations: 15"));
}

#[test]
fn test_pretty_format_is_multiline_json() {
    let output = matrixgen().args(["--format", "pretty"]).output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.lines().count() > 15);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, run_json(&[]));
}

#[test]
fn test_config_overrides_tables() {
    let (_td, path) = write_config(
        r#"
versions = ["main", "3.0.0"]
build_shared_libs = ["off", "on"]

[[platforms]]
platform = "windows-x86_64"
os = "windows-2022"
triplet = "x64-windows-release"
arch = "x64"
"#,
    );

    let value = run_json(&["--config", &path]);
    let records = include(&value);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["build_shared_libs"], "off");
    assert_eq!(records[1]["build_shared_libs"], "on");
    assert_eq!(records[2]["version"], "3.0.0");
    assert_eq!(records[2]["linkage"], "Static");
    assert_eq!(records[2]["arch"], "x64");
}

#[test]
fn test_missing_config_file_fails() {
    matrixgen()
        .args(["--config", "does-not-exist.toml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("read config file"));
}

#[test]
fn test_invalid_config_fails() {
    let (_td, path) = write_config("versions = \"main\"\n");
    matrixgen()
        .args(["--config", &path])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("parse config file"));
}

#[test]
fn test_reserved_platform_key_fails() {
    let (_td, path) = write_config(
        r#"
[[platforms]]
platform = "linux-x86_64"
os = "ubuntu-22.04"
triplet = "x64-linux-release"
linkage = "Dynamic"
"#,
    );
    matrixgen()
        .args(["--config", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved key 'linkage'"));
}

#[test]
fn test_reserved_platform_key_in_other_case_fails() {
    let (_td, path) = write_config(
        r#"
[[platforms]]
platform = "macos-arm64"
os = "macos-latest"
triplet = "arm64-osx-release"
macosx_deployment_target = "12"
Linkage = "Dynamic"
"#,
    );
    matrixgen()
        .args(["--config", &path])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("reserved key 'Linkage'"));
}

#[test]
fn test_lowercase_deployment_target_key_fails() {
    let (_td, path) = write_config(
        r#"
[[platforms]]
platform = "macos-arm64"
os = "macos-latest"
triplet = "arm64-osx-release"
macosx_deployment_target = "12"
"#,
    );
    let expected = "reserved key 'macosx_deployment_target'";
    matrixgen()
        .args(["--config", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains(expected));
}
