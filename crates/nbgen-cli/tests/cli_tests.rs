//! Integration tests for all CLI commands
//!
//! Tests each command with real invocations.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a CLI command
fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nbgen"))
}

/// Exact byte contract of the Python starter file
const PYTHON_STARTER_JSON: &str = r#"{
  "cells": [
    {
      "cell_type": "code",
      "execution_count": null,
      "metadata": {},
      "outputs": [],
      "source": [
        "print('Hello, world!')"
      ]
    }
  ],
  "metadata": {
    "kernelspec": {
      "display_name": "Python 3",
      "language": "python",
      "name": "python3"
    },
    "language_info": {
      "name": "python"
    }
  },
  "nbformat": 4,
  "nbformat_minor": 2
}"#;

// ============ NEW COMMAND TESTS ============

#[test]
fn test_new_help() {
    cli()
        .arg("new")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Write a starter notebook file"));
}

#[test]
fn test_new_default_output() {
    let dir = TempDir::new().unwrap();

    cli()
        .arg("new")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Python notebook created successfully!",
        ));

    let written = fs::read_to_string(dir.path().join("python-demo.ipynb")).unwrap();
    assert_eq!(written, PYTHON_STARTER_JSON);
}

#[test]
fn test_new_explicit_output_path() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("starter.ipynb");

    cli()
        .arg("new")
        .arg(&output_path)
        .assert()
        .success();

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, PYTHON_STARTER_JSON);
}

#[test]
fn test_new_javascript_kernel() {
    let dir = TempDir::new().unwrap();

    cli()
        .arg("new")
        .arg("--kernel")
        .arg("javascript")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "JavaScript notebook created successfully!",
        ));

    let written = fs::read_to_string(dir.path().join("js-demo-new.ipynb")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(parsed["nbformat"], 4);
    assert_eq!(parsed["nbformat_minor"], 4);
    assert_eq!(parsed["metadata"]["kernelspec"]["name"], "javascript");
    assert_eq!(
        parsed["metadata"]["language_info"]["mimetype"],
        "application/javascript"
    );
    assert_eq!(
        parsed["cells"][0]["source"][0],
        "console.log(\"Hello, world!\");"
    );
}

#[test]
fn test_new_quiet_suppresses_confirmation() {
    let dir = TempDir::new().unwrap();

    cli()
        .arg("new")
        .arg("--quiet")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("python-demo.ipynb").exists());
}

#[test]
fn test_new_overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("python-demo.ipynb");
    fs::write(&output_path, "stale content").unwrap();

    cli()
        .arg("new")
        .current_dir(dir.path())
        .assert()
        .success();

    let written = fs::read_to_string(&output_path).unwrap();
    assert_eq!(written, PYTHON_STARTER_JSON);
}

#[test]
fn test_new_is_byte_identical_across_runs() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("python-demo.ipynb");

    cli().arg("new").current_dir(dir.path()).assert().success();
    let first = fs::read(&output_path).unwrap();

    cli().arg("new").current_dir(dir.path()).assert().success();
    let second = fs::read(&output_path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_new_missing_parent_directory_fails() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("no-such-dir").join("starter.ipynb");

    cli()
        .arg("new")
        .arg(&output_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write notebook file"));
}

#[test]
fn test_new_kernel_from_project_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".nbgen.toml"), "[new]\nkernel = \"javascript\"\n").unwrap();

    cli()
        .arg("new")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "JavaScript notebook created successfully!",
        ));

    assert!(dir.path().join("js-demo-new.ipynb").exists());
}

#[test]
fn test_new_cli_kernel_overrides_project_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".nbgen.toml"), "[new]\nkernel = \"javascript\"\n").unwrap();

    cli()
        .arg("new")
        .arg("--kernel")
        .arg("python")
        .current_dir(dir.path())
        .assert()
        .success();

    assert!(dir.path().join("python-demo.ipynb").exists());
}

#[test]
fn test_new_malformed_config_warns_and_continues() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".nbgen.toml"), "not valid toml [[[").unwrap();

    cli()
        .arg("new")
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to parse config file"));

    assert!(dir.path().join("python-demo.ipynb").exists());
}

// ============ KERNELS COMMAND TESTS ============

#[test]
fn test_kernels_table() {
    cli()
        .arg("kernels")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available kernel presets:"))
        .stdout(predicate::str::contains("python"))
        .stdout(predicate::str::contains("JavaScript (Node.js)"));
}

#[test]
fn test_kernels_json() {
    let output = cli().arg("kernels").arg("--json").assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = parsed.as_array().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["kernel"], "python");
    assert_eq!(entries[0]["default_output"], "python-demo.ipynb");
    assert_eq!(entries[1]["kernel"], "javascript");
    assert_eq!(entries[1]["display_name"], "JavaScript (Node.js)");
}

// ============ COMPLETION COMMAND TESTS ============

#[test]
fn test_completion_bash() {
    cli()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("nbgen"));
}

// ============ GENERAL CLI TESTS ============

#[test]
fn test_help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("kernels"))
        .stdout(predicate::str::contains("completion"));
}

#[test]
fn test_version_flag() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("nbgen"));
}
