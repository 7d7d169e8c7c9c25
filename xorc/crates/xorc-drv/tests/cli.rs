//! CLI Interface Tests
//!
//! These tests run the `xorc` binary against the fixtures directory and check
//! its output, exit status and diagnostics.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get a command running the xorc binary with a clean environment
fn xorc() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_xorc"));
    cmd.env_remove("RUST_LOG")
        .env_remove("XORC_VERBOSE")
        .env_remove("XORC_CONFIG")
        .env_remove("XORC_NO_COLOR");
    cmd
}

#[test]
fn test_cli_help() {
    xorc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_cli_version() {
    xorc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("xorc").and(predicate::str::contains("0.")));
}

#[test]
fn test_cli_tokens_text() {
    xorc()
        .arg("tokens")
        .arg(fixtures_dir().join("hello.xor"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1"))
        .stdout(predicate::str::contains("RETURN_ARROW"))
        .stdout(predicate::str::contains("INT_32BIT"))
        .stdout(predicate::str::contains("\"int\""))
        .stdout(predicate::str::contains("SPACE"))
        .stdout(predicate::str::contains("EOI"));
}

#[test]
fn test_cli_tokens_no_trivia() {
    let output = xorc()
        .arg("tokens")
        .arg("--no-trivia")
        .arg(fixtures_dir().join("program.xor"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("SPACE"));
    assert!(!stdout.contains("NEWLINE"));
    assert!(!stdout.contains("COMMENT"));
    assert!(stdout.contains("DECIMAL"));
    assert!(stdout.contains("CHARACTER"));
    assert!(stdout.lines().last().unwrap().contains("EOI"));
}

#[test]
fn test_cli_tokens_json() {
    let output = xorc()
        .args(["tokens", "--format", "json", "--no-trivia"])
        .arg(fixtures_dir().join("program.xor"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = value.as_array().unwrap();
    assert_eq!(tokens[0]["kind"], "FN");
    assert_eq!(tokens[0]["line"], 2);
    assert_eq!(tokens[0]["column"], 1);

    let string = tokens.iter().find(|t| t["kind"] == "STRING").unwrap();
    assert_eq!(string["text"], "\"tab\\there\"");
    assert_eq!(string["value"], "tab\there");
}

#[test]
fn test_cli_tokens_from_stdin() {
    xorc()
        .args(["tokens", "-"])
        .write_stdin("x->y")
        .assert()
        .success()
        .stdout(predicate::str::contains("RETURN_ARROW"))
        .stdout(predicate::str::contains("IDENTIFIER"));
}

#[test]
fn test_cli_check_ok() {
    xorc()
        .arg("check")
        .arg(fixtures_dir().join("hello.xor"))
        .assert()
        .success()
        .stdout("ok: 24 tokens (11 significant)\n");
}

#[test]
fn test_cli_check_unexpected_character() {
    xorc()
        .arg("check")
        .arg(fixtures_dir().join("bad_char.xor"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("error: unexpected character '$'"))
        .stderr(predicate::str::contains("bad_char.xor:2:15"))
        .stderr(predicate::str::contains("  2 |     let x = 1 $ 2;"));
}

#[test]
fn test_cli_tokens_unterminated_string() {
    xorc()
        .arg("tokens")
        .arg(fixtures_dir().join("unterminated.xor"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: unterminated string literal"))
        .stderr(predicate::str::contains("unterminated.xor:2:13"))
        .stderr(predicate::str::contains("= help: close the literal"));
}

#[test]
fn test_cli_check_open_comment() {
    xorc()
        .arg("check")
        .arg(fixtures_dir().join("open_comment.xor"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unterminated block comment"))
        .stderr(predicate::str::contains("open_comment.xor:1:1"));
}

#[test]
fn test_cli_missing_input() {
    xorc()
        .args(["check", "does/not/exist.xor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: cannot read does/not/exist.xor"));
}

#[test]
fn test_cli_config_file_in_current_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(
        temp_dir.path().join("xorc.toml"),
        "[tokens]\ntrivia = false\n",
    )
    .unwrap();

    xorc()
        .current_dir(temp_dir.path())
        .arg("tokens")
        .arg(fixtures_dir().join("hello.xor"))
        .assert()
        .success()
        .stdout(predicate::str::contains("SPACE").not())
        .stdout(predicate::str::contains("RETURN"));
}

#[test]
fn test_cli_format_flag_overrides_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config = temp_dir.path().join("custom.toml");
    std::fs::write(&config, "[tokens]\nformat = \"json\"\n").unwrap();

    xorc()
        .arg("--config")
        .arg(&config)
        .args(["tokens", "--format", "text"])
        .arg(fixtures_dir().join("hello.xor"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1"));

    xorc()
        .arg("--config")
        .arg(&config)
        .arg("tokens")
        .arg(fixtures_dir().join("hello.xor"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_cli_missing_config_file() {
    xorc()
        .args(["--config", "/nonexistent/xorc.toml", "check"])
        .arg(fixtures_dir().join("hello.xor"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"))
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    xorc()
        .args(["--verbose", "--no-color", "check"])
        .arg(fixtures_dir().join("hello.xor"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok:"))
        .stderr(predicate::str::contains("DEBUG"))
        .stderr(predicate::str::contains("check passed"));
}
