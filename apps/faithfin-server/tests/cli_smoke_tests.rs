//! CLI smoke tests for the faithfin-server binary: help output,
//! configuration validation, and the check command.

use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Helper to run the faithfin-server binary with given arguments
fn run_faithfin_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_faithfin-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute faithfin-server")
}

fn write_config(dir: &TempDir, yaml: &str) -> String {
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, yaml).expect("Failed to write config");
    path.to_string_lossy().into_owned()
}

fn valid_config(dir: &TempDir) -> String {
    let home = dir.path().join("home");
    write_config(
        dir,
        &format!(
            r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 0

database:
  url: "sqlite::memory:"

auth:
  token_secret: "smoke-test-secret"
  token_ttl_hours: 1
  bcrypt_cost: 4
"#,
            home.display()
        ),
    )
}

#[test]
fn test_cli_help_command() {
    let output = run_faithfin_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("faithfin-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.contains("Usage:") || stdout.contains("USAGE:"),
        "Should contain usage information"
    );
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(
        stdout.contains("seed-demo"),
        "Should contain 'seed-demo' subcommand"
    );
    assert!(stdout.contains("--config"), "Should mention config option");
}

#[test]
fn test_cli_version_command() {
    let output = run_faithfin_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("faithfin-server"),
        "Should contain binary name"
    );
    assert!(
        stdout.chars().any(|c| c.is_ascii_digit()),
        "Should contain version numbers"
    );
}

#[test]
fn test_cli_invalid_command() {
    let output = run_faithfin_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid") || stderr.contains("unexpected"),
        "Should contain error message about invalid command"
    );
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_faithfin_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success(), "Should fail with missing config");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not found") || stderr.contains("config"),
        "Should mention config file issue: {}",
        stderr
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = write_config(&temp_dir, "invalid: yaml: content: [unclosed");

    let output = run_faithfin_server(&["--config", &config_path, "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");
}

#[test]
fn test_cli_check_with_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = valid_config(&temp_dir);

    let output = run_faithfin_server(&["--config", &config_path, "check"]);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "Check should succeed: {}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Configuration OK"),
        "Should confirm the configuration"
    );
}

#[test]
fn test_cli_print_config_echoes_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = valid_config(&temp_dir);

    let output = run_faithfin_server(&["--config", &config_path, "--print-config"]);

    assert!(output.status.success(), "print-config should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("server:"), "Should echo the server section");
    assert!(
        stdout.contains("smoke-test-secret"),
        "Should echo the loaded auth section"
    );
}

#[test]
fn test_cli_seed_demo_creates_account() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let home = temp_dir.path().join("home");
    let config_path = write_config(
        &temp_dir,
        &format!(
            r#"
server:
  home_dir: "{}"
  host: "127.0.0.1"
  port: 0

database:
  url: "sqlite://data/faithfin.db"

auth:
  token_secret: "smoke-test-secret"
  token_ttl_hours: 1
  bcrypt_cost: 4
"#,
            home.display()
        ),
    );

    let output = run_faithfin_server(&["--config", &config_path, "seed-demo"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "seed-demo should succeed: {}", stderr);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("demo@faithfin.app"), "Should print the account");

    // Re-running is a no-op that keeps the existing account.
    let output = run_faithfin_server(&["--config", &config_path, "seed-demo"]);
    assert!(output.status.success(), "second seed-demo should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("already present"),
        "Should report the existing account: {}",
        stdout
    );
}
