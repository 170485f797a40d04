// crates/arith-cli/tests/evaluate_command.rs
// ============================================================================
// Module: CLI Evaluate Command Tests
// Description: Process-level tests for the `arith` binary.
// Purpose: Pin stdout, stderr and exit codes for evaluation commands.
// Dependencies: arith-cli binary, tempfile
// ============================================================================
//! ## Overview
//! Runs the compiled `arith` binary and checks the observable contract:
//! results on stdout, localized errors on stderr, zero exit on success and
//! non-zero on failure.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::Output;

use tempfile::TempDir;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn arith_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_arith"))
}

/// Runs the binary in an empty working directory with a clean environment.
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(arith_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("ARITH_CONFIG")
        .env_remove("ARITH_LANG")
        .env_remove("ARITH_LOG")
        .output()
        .expect("run arith")
}

fn run(args: &[&str]) -> Output {
    let dir = TempDir::new().expect("temp dir");
    run_in(dir.path(), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

// ============================================================================
// SECTION: Tests
// ============================================================================

/// Verifies the fixed scenarios through the binary.
#[test]
fn cli_prints_results_for_fixed_scenarios() {
    let cases = [
        ("add", "1", "1", "2"),
        ("add", "2", "8", "10"),
        ("add", "50", "50", "100"),
        ("sub", "1", "1", "0"),
        ("sub", "2", "8", "-6"),
        ("sub", "150", "50", "100"),
        ("mul", "1", "1", "1"),
        ("mul", "2", "8", "16"),
        ("mul", "150", "10", "1500"),
    ];
    for (command, lhs, rhs, expected) in cases {
        let output = run(&[command, lhs, rhs]);
        assert!(output.status.success(), "{command} {lhs} {rhs} failed: {}", stderr(&output));
        assert_eq!(stdout(&output), expected, "{command} {lhs} {rhs}");
    }
}

/// Verifies negative operands and eval symbols.
#[test]
fn cli_accepts_negative_operands_and_symbols() {
    let output = run(&["eval", "-", "2", "-3"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "5");
}

/// Verifies JSON output carries the evaluation record.
#[test]
fn cli_json_output_contains_record() {
    let output = run(&["mul", "2", "8", "--format", "json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["operation"], "mul");
    assert_eq!(value["lhs"], 2);
    assert_eq!(value["rhs"], 8);
    assert_eq!(value["result"], 16);
}

/// Verifies checked overflow fails with a non-zero exit code.
#[test]
fn cli_checked_overflow_fails() {
    let max = i64::MAX.to_string();
    let output = run(&["add", max.as_str(), "1", "--overflow", "checked"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("integer overflow"), "{}", stderr(&output));
}

/// Verifies wrapping and saturating overflow policies.
#[test]
fn cli_wrapping_and_saturating_policies() {
    let max = i64::MAX.to_string();
    let wrapped = run(&["add", max.as_str(), "1"]);
    assert_eq!(stdout(&wrapped), i64::MIN.to_string());
    let saturated = run(&["add", max.as_str(), "1", "--overflow", "saturating"]);
    assert_eq!(stdout(&saturated), max);
}

/// Verifies the config file supplies defaults that flags override.
#[test]
fn cli_reads_default_config_file() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("arith.toml"), "[evaluation]\noverflow = \"checked\"\n")
        .expect("write config");
    let max = i64::MAX.to_string();
    let from_config = run_in(dir.path(), &["mul", max.as_str(), "2"]);
    assert!(!from_config.status.success());
    let overridden = run_in(dir.path(), &["mul", max.as_str(), "2", "--overflow", "wrapping"]);
    assert!(overridden.status.success(), "{}", stderr(&overridden));
    assert_eq!(stdout(&overridden), "-2");
}

/// Verifies invalid config files fail closed.
#[test]
fn cli_rejects_invalid_config() {
    let dir = TempDir::new().expect("temp dir");
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "[evaluation]\noverflow = \"sometimes\"\n").expect("write config");
    let path = config_path.to_string_lossy().to_string();
    let output = run(&["add", "1", "1", "--config", path.as_str()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to load config"), "{}", stderr(&output));

    let validate = run(&["config", "validate", "--config", path.as_str()]);
    assert!(!validate.status.success());
}

/// Verifies `config validate` reports effective settings.
#[test]
fn cli_config_validate_reports_settings() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("arith.toml"), "[output]\nformat = \"json\"\n")
        .expect("write config");
    let output = run_in(dir.path(), &["config", "validate"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "Config OK (overflow=wrapping, format=json, log_level=warn)");
}

/// Verifies `ops` lists every operation.
#[test]
fn cli_lists_operations() {
    let output = run(&["ops"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "add\t+\nsub\t-\nmul\t*");
}

/// Verifies unknown locales in the environment are rejected.
#[test]
fn cli_rejects_invalid_lang_env() {
    let dir = TempDir::new().expect("temp dir");
    let output = Command::new(arith_bin())
        .args(["add", "1", "1"])
        .current_dir(dir.path())
        .env_remove("ARITH_CONFIG")
        .env("ARITH_LANG", "xx")
        .output()
        .expect("run arith");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("ARITH_LANG"));
}

/// Verifies Catalan output carries the machine translation disclaimer.
#[test]
fn cli_catalan_errors_are_localized() {
    let max = i64::MAX.to_string();
    let output = run(&["add", max.as_str(), "1", "--overflow", "checked", "--lang", "ca"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("traduïda automàticament"), "{err}");
    assert!(err.contains("L'avaluació ha fallat"), "{err}");
}

/// Verifies argument errors exit with code 1 and a catalog message.
#[test]
fn cli_invalid_operation_exits_one() {
    let output = run(&["eval", "div", "1", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("Invalid arguments"), "{err}");
    assert!(err.contains("div"), "{err}");

    let missing = run(&["add", "1"]);
    assert_eq!(missing.status.code(), Some(1));
}

/// Verifies argument errors honor `--lang` even when parsing fails.
#[test]
fn cli_invalid_arguments_are_localized() {
    let output = run(&["eval", "div", "1", "1", "--lang", "ca"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("traduïda automàticament"), "{err}");
    assert!(err.contains("Arguments no vàlids"), "{err}");
}

/// Verifies `--help` still prints usage and succeeds.
#[test]
fn cli_help_succeeds() {
    let output = run(&["--help"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Usage"));
}

/// Verifies `ops` does not depend on a readable config file.
#[test]
fn cli_ops_ignores_malformed_config() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("arith.toml"), "garbage = 1\n").expect("write config");
    let output = run_in(dir.path(), &["ops"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "add\t+\nsub\t-\nmul\t*");

    let evaluate = run_in(dir.path(), &["add", "1", "1"]);
    assert!(!evaluate.status.success());
}
