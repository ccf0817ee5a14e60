//! Binary integration tests for CLI commands
//!
//! These tests run the actual folio binary to exercise the CLI code paths.

#![expect(clippy::unwrap_used, reason = "integration test assertions")]

use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// The binary with its config isolated in `home`.
fn folio_bin(home: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_folio"));
    command
        .env("XDG_CONFIG_HOME", home.path())
        .env_remove("FOLIO_REDUCED_MOTION")
        .env_remove("DEBUG");
    command
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home).arg("--help").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("portfolio"));
    assert!(stdout.contains("--content"));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home).arg("--version").output().unwrap();
    assert!(output.status.success());
}

#[test]
fn test_cli_invalid_argument_shows_help() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home).arg("--invalid-flag").output().unwrap();

    // Should fail with non-zero exit code
    assert!(!output.status.success());

    // Should show error message on stderr
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));

    // Should show help text on stdout
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_config_show_applies_flags() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home)
        .args(["config", "--endpoint", "https://example.com/contact", "--reduced-motion"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["contact_endpoint"], "https://example.com/contact");
    assert_eq!(config["reduced_motion"], true);
    assert_eq!(config["submit_timeout_secs"], 10);
}

#[test]
fn test_cli_config_path() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home).args(["config", "--path"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.trim().ends_with("config.json"));
    assert!(stdout.contains("folio"));
}

#[test]
fn test_cli_config_init_then_load() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.json");
    let path_arg = path.to_str().unwrap();

    let output = folio_bin(&home)
        .args(["config", "--init", "--config", path_arg])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(path.exists());

    let edited = fs::read_to_string(&path)
        .unwrap()
        .replace("\"tick_rate_ms\": 100", "\"tick_rate_ms\": 40");
    fs::write(&path, edited).unwrap();

    let output = folio_bin(&home)
        .args(["config", "--config", path_arg])
        .output()
        .unwrap();
    let config: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(config["tick_rate_ms"], 40);
}

#[test]
fn test_cli_check_embedded() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home).arg("check").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Alex Rivera"));
    assert!(stdout.contains("Projects: 4 (2 featured)"));
}

#[test]
fn test_cli_check_missing_content_fails() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home)
        .args(["check", "--content"])
        .arg(home.path().join("nowhere"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("personal-info.json"));
}

#[test]
fn test_cli_send_reports_field_errors() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home)
        .args(["send", "--name", "Jane", "--email", "jane", "--message", "short"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Email:"));
    assert!(stderr.contains("Message:"));
    assert!(!stderr.contains("Name:"));
}

#[test]
fn test_cli_send_posts_to_endpoint() {
    let home = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/contact")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"name":"Jane","email":"jane@x.com"}"#.to_string(),
        ))
        .with_status(200)
        .create();

    let output = folio_bin(&home)
        .args([
            "send",
            "--name",
            "<b>Jane</b>",
            "--email",
            "jane@x.com",
            "--message",
            "this is long enough",
            "--endpoint",
        ])
        .arg(format!("{}/contact", server.url()))
        .output()
        .unwrap();

    mock.assert();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Thank you for your message"));
}

#[test]
fn test_cli_send_without_endpoint_fails() {
    let home = TempDir::new().unwrap();
    let output = folio_bin(&home)
        .args([
            "send",
            "--name",
            "Jane",
            "--email",
            "jane@x.com",
            "--message",
            "this is long enough",
        ])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not be sent"));
}
