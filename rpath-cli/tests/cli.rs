//! Integration tests for the rpath CLI.
//!
//! These tests verify argument parsing, help text, version output and
//! global options.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("rpath").expect("Failed to find rpath binary");

    // Subcommands are required
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("rpath").expect("Failed to find rpath binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rpath"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("rpath").expect("Failed to find rpath binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Inspect and compose remote SFTP paths"));
}

#[test]
fn test_help_lists_commands() {
    let env = TestEnv::new();
    let help = env.stdout(&["--help"]);
    for command in ["segments", "inspect", "join", "compare", "check"] {
        assert!(help.contains(command), "missing {command} in help");
    }
}

#[test]
fn test_unknown_format_is_rejected() {
    let env = TestEnv::new();
    env.command()
        .args(["--format", "xml", "inspect", "/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_format_flag_after_subcommand() {
    let env = TestEnv::new();
    let stdout = env.stdout(&["inspect", "/", "--format", "json"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["root"], true);
}

#[test]
fn test_configured_format_applies() {
    let env = TestEnv::new();
    env.write_user_config("output_format: json\n");

    let stdout = env.stdout(&["segments", "foo/bar/"]);
    let value: Vec<String> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value, ["foo", "bar", "."]);

    // the flag wins over the file
    let stdout = env.stdout(&["--format", "human", "segments", "foo/bar/"]);
    assert_eq!(stdout, "foo\nbar\n.\n");
}

#[test]
fn test_format_from_environment() {
    let env = TestEnv::new();
    env.command()
        .env("RPATH_OUTPUT_FORMAT", "json")
        .args(["join", "a", "b"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"path\":\"a/b\""));
}

#[test]
fn test_explicit_config_flag() {
    let env = TestEnv::new();
    let config = env.write_config("site.yaml", "policy:\n  require_absolute: true\n");

    env.command()
        .arg("--config")
        .arg(&config)
        .args(["check", "relative/path"])
        .assert()
        .code(1);
}

#[test]
fn test_config_from_environment_variable() {
    let env = TestEnv::new();
    let config = env.write_config("site.yaml", "policy:\n  require_absolute: true\n");

    env.command()
        .env("RPATH_CONFIG", &config)
        .args(["check", "relative/path"])
        .assert()
        .code(1);
}

#[test]
fn test_missing_config_file_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["--config", "/nonexistent/rpath.yaml", "inspect", "/"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_policy_fails_policy_commands() {
    let env = TestEnv::new();
    env.write_user_config("policy:\n  max_path_length: 0\n");

    env.command()
        .args(["check", "/"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("max_path_length"));

    env.command()
        .args(["join", "/", "a", "--check"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_policy_does_not_block_other_commands() {
    let env = TestEnv::new();
    env.write_user_config("policy:\n  max_path_length: 0\n");

    env.command().args(["inspect", "/"]).assert().success();
    env.command().args(["segments", "/a/b"]).assert().success();
    env.command().args(["compare", "/a", "/b"]).assert().success();
    env.command().args(["join", "a", "b"]).assert().success();
}

#[test]
fn test_path_limit_override_alone() {
    let env = TestEnv::new();
    env.command()
        .env("RPATH_MAX_PATH_LENGTH", "200")
        .args(["segments", "/a/b"])
        .assert()
        .success()
        .stdout("/\na\nb\n");

    // the name limit follows the lowered path limit
    env.command()
        .env("RPATH_MAX_PATH_LENGTH", "8")
        .args(["check", "/abcdefgh"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("limit is 8"));
}

#[test]
fn test_invalid_environment_value_exit_code() {
    let env = TestEnv::new();
    env.command()
        .env("RPATH_REQUIRE_ABSOLUTE", "perhaps")
        .args(["inspect", "/"])
        .assert()
        .code(7);
}

#[test]
fn test_verbose_writes_diagnostics_to_stderr() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "join", "a", "b"])
        .assert()
        .success()
        .stdout("a/b\n")
        .stderr(predicate::str::contains("DEBUG: joined \"b\": a/b"));
}

#[test]
fn test_verbose_shows_library_diagnostics() {
    let env = TestEnv::new();
    env.command()
        .args(["--verbose", "check", "/srv/www"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no user config at"))
        .stderr(predicate::str::contains("accepted by policy"));
}

#[test]
fn test_diagnostics_hidden_by_default() {
    let env = TestEnv::new();
    env.command()
        .args(["check", "/srv/www"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_log_mode_environment() {
    let env = TestEnv::new();
    env.command()
        .env("RPATH_LOG_MODE", "verbose")
        .args(["segments", "a"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"));
}
