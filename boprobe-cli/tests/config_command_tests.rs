//! Integration tests for `boprobe config`.
//!
//! Tests config validation and display functionality with real TOML files.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn boprobe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_boprobe"))
}

#[tokio::test]
async fn test_config_validate_valid_toml() {
    // Given: A valid config file
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("boprobe.toml");

    let valid_config = r#"
[general]
log_level = "info"
log_format = "json"

[webdriver]
browser = "firefox"
"#;

    fs::write(&config_path, valid_config).expect("should write config");

    // When: Loading the config
    let result = boprobe_core::config::BoprobeConfig::load(&config_path).await;

    // Then: Should succeed
    assert!(result.is_ok(), "valid config should load successfully");
}

#[tokio::test]
async fn test_config_validate_malformed_toml() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("bad.toml");

    fs::write(&config_path, "[general\nlog_level = \"info\"\n").expect("should write bad config");

    let result = boprobe_core::config::BoprobeConfig::load(&config_path).await;
    assert!(result.is_err(), "malformed TOML should fail to load");
}

#[tokio::test]
async fn test_config_validate_empty_file() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("empty.toml");

    fs::write(&config_path, "").expect("should write empty file");

    let config = boprobe_core::config::BoprobeConfig::load(&config_path)
        .await
        .expect("empty config should use defaults");
    assert_eq!(config.campaign.bulk_quantity, 301);
    assert_eq!(config.webdriver.browser, "chrome");
}

#[test]
fn test_cli_config_validate_exit_codes() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let good = temp_dir.path().join("good.toml");
    let bad = temp_dir.path().join("bad.toml");
    fs::write(&good, "[backoffice]\nlanguage = \"fr\"\n").expect("write");
    fs::write(&bad, "[webdriver]\ntimeout_secs = 0\n").expect("write");

    let status = boprobe()
        .args(["config", "validate", "--config"])
        .arg(&good)
        .status()
        .expect("run boprobe");
    assert_eq!(status.code(), Some(0));

    let output = boprobe()
        .args(["--output", "json", "config", "validate", "--config"])
        .arg(&bad)
        .output()
        .expect("run boprobe");
    assert_eq!(output.status.code(), Some(2), "invalid config should exit 2");
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["valid"], false);
    assert!(report["errors"][0].as_str().unwrap_or("").contains("timeout_secs"));
}

#[test]
fn test_cli_config_validate_missing_file() {
    let status = boprobe()
        .args(["config", "validate", "--config", "/nonexistent/boprobe.toml"])
        .status()
        .expect("run boprobe");
    assert_eq!(status.code(), Some(2));
}

#[test]
fn test_cli_config_show_redacts_password() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("boprobe.toml");
    fs::write(
        &config_path,
        "[backoffice]\nemail = \"qa@example.com\"\npassword = \"hunter2\"\n",
    )
    .expect("write");

    let output = boprobe()
        .args(["config", "show", "--section", "backoffice", "--config"])
        .arg(&config_path)
        .env_remove("BOPROBE_BACKOFFICE_PASSWORD")
        .output()
        .expect("run boprobe");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("qa@example.com"));
    assert!(stdout.contains("***REDACTED***"));
    assert!(!stdout.contains("hunter2"));
}

#[test]
fn test_cli_sort_json_output() {
    let output = boprobe()
        .args(["--output", "json", "sort", "10", "2", "9", "--numeric", "--desc"])
        .output()
        .expect("run boprobe");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["expected"], serde_json::json!(["10", "9", "2"]));
    assert_eq!(report["direction"], "desc");
    assert_eq!(report["value_kind"], "numeric");
}

#[test]
fn test_cli_verify_mismatch_exits_5() {
    let status = boprobe()
        .args(["verify", "--actual", "B,A", "--expected", "A,B"])
        .status()
        .expect("run boprobe");
    assert_eq!(status.code(), Some(5));

    let status = boprobe()
        .args(["verify", "--actual", "A,B", "--expected", "A,B"])
        .status()
        .expect("run boprobe");
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_cli_thumbnails_lists_matches() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    for name in ["7-0_thumb.jpg", "7-1_thumb.jpg", "70-0_thumb.jpg", "7.jpg"] {
        fs::write(temp_dir.path().join(name), b"").expect("write");
    }

    let output = boprobe()
        .args(["--output", "json", "thumbnails"])
        .arg(temp_dir.path())
        .arg("7")
        .output()
        .expect("run boprobe");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let files = report["files"].as_array().expect("files array");
    assert_eq!(files.len(), 2);
    assert!(files[0].as_str().unwrap_or("").ends_with("7-0_thumb.jpg"));
}

#[test]
fn test_cli_run_simulated_campaign() {
    let temp_dir = TempDir::new().expect("should create temp dir");
    let config_path = temp_dir.path().join("boprobe.toml");
    fs::write(&config_path, "[backoffice]\npassword = \"demo\"\n").expect("write");

    let output = boprobe()
        .args(["--output", "json", "run", "sort-and-pagination", "--simulate", "--config"])
        .arg(&config_path)
        .output()
        .expect("run boprobe");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["campaign"], "sort-and-pagination");
    assert_eq!(report["steps"].as_array().map(Vec::len), Some(18));
}

#[test]
fn test_cli_run_unknown_campaign_exits_1() {
    let status = boprobe()
        .args(["run", "checkout", "--simulate", "--config", "/nonexistent/boprobe.toml"])
        .status()
        .expect("run boprobe");
    assert_eq!(status.code(), Some(1));
}
