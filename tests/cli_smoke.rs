#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! Every test points `XDG_CONFIG_HOME` at a temporary directory so the
//! user's real configuration is never read or written. None of them reach a
//! real translation service.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn fanyi(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fanyi").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("English/Chinese translation"))
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--no-pinyin"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("en"))
        .stdout(predicate::str::contains("zh"))
        .stdout(predicate::str::contains("Chinese (Simplified)"));
}

#[test]
fn test_providers_lists_builtin_google() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .arg("providers")
        .assert()
        .success()
        .stdout(predicate::str::contains("google"))
        .stdout(predicate::str::contains("translate.googleapis.com"));
}

#[test]
fn test_providers_unknown_name() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .args(["providers", "nonexistent_provider_xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_language_code() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .args(["--to", "invalid_lang_xyz"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid language code"));
}

#[test]
fn test_empty_input_fails_without_network() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .write_stdin("   \n")
        .assert()
        .code(exitcode::DATAERR)
        .stderr(predicate::str::contains("No text to translate"));
}

#[test]
fn test_unknown_provider_is_reported() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .args(["-p", "missing", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provider 'missing' not found"));
}

#[test]
fn test_unreachable_provider_exits_unavailable() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("fanyi");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[providers.local]
kind = "openai"
endpoint = "http://127.0.0.1:9"
model = "test"
"#,
    )
    .unwrap();

    fanyi(&home)
        .args(["-p", "local", "--timeout", "10", "hello"])
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stderr(predicate::str::contains("Translation service unavailable"));
}

#[test]
fn test_session_help() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .args(["session", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--from"))
        .stdout(predicate::str::contains("--to"))
        .stdout(predicate::str::contains("--provider"))
        .stdout(predicate::str::contains("--model"));
}

#[test]
fn test_session_commands_from_stdin() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .arg("session")
        .write_stdin("/help\n/to en\n/status\n/bogus\n/quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive Translation Mode"))
        .stdout(predicate::str::contains("/swap"))
        .stdout(predicate::str::contains("Characters:"))
        .stdout(predicate::str::contains("Goodbye!"))
        .stderr(predicate::str::contains("Unknown command: /bogus"));
}

#[test]
fn test_session_quit_reports_request_in_flight() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join("fanyi");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        r#"
[providers.local]
kind = "openai"
endpoint = "http://127.0.0.1:9"
model = "test"
"#,
    )
    .unwrap();

    fanyi(&home)
        .args(["session", "-p", "local", "--timeout", "10"])
        .write_stdin("hello\n/quit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Translating..."))
        .stderr(predicate::str::contains("Translation service unavailable"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_session_ends_at_end_of_input() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .arg("session")
        .write_stdin("/config\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("provider"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_configure_init_creates_file_once() {
    let home = TempDir::new().unwrap();
    let config_path = home.path().join("fanyi").join("config.toml");

    fanyi(&home)
        .args(["configure", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(config_path.exists());
    assert_eq!(fs::read_to_string(&config_path).unwrap(), "");

    fanyi(&home)
        .args(["configure", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found existing"));
}

#[test]
fn test_configure_show() {
    let home = TempDir::new().unwrap();
    fanyi(&home)
        .args(["configure", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current defaults"))
        .stdout(predicate::str::contains("show_pinyin"));
}
