//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use gitexport::config::load_config;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("GITEXPORT_APPLICATION_LOG_LEVEL");
    std::env::remove_var("GITEXPORT_SERVICE_BASE_URL");
    std::env::remove_var("GITEXPORT_SERVICE_TIMEOUT_SECONDS");
    std::env::remove_var("GITEXPORT_POLLING_INTERVAL_MS");
    std::env::remove_var("GITEXPORT_POLLING_STAGE_INTERVAL_MS");
    std::env::remove_var("GITEXPORT_POLLING_TIMEOUT_SECS");
    std::env::remove_var("TEST_EXPORT_BASE_URL");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[service]
base_url = "https://export.example.com"
timeout_seconds = 60

[polling]
interval_ms = 1000
stage_interval_ms = 750
timeout_secs = 600

[logging]
local_enabled = true
local_path = "/tmp/gitexport"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.service.base_url, "https://export.example.com");
    assert_eq!(config.service.timeout_seconds, 60);
    assert_eq!(config.polling.interval_ms, 1000);
    assert_eq!(config.polling.stage_interval_ms, 750);
    assert_eq!(config.polling.timeout_secs, Some(600));
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_path, "/tmp/gitexport");
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_load_minimal_config_applies_defaults() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[service]
base_url = "https://export.example.com"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.service.timeout_seconds, 30);
    assert_eq!(config.polling.interval_ms, 2000);
    assert_eq!(config.polling.stage_interval_ms, 1500);
    assert!(config.polling.timeout_secs.is_none());
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("TEST_EXPORT_BASE_URL", "https://export.internal.example.com");

    let temp_file = write_config(
        r#"
[service]
base_url = "${TEST_EXPORT_BASE_URL}"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(
        config.service.base_url,
        "https://export.internal.example.com"
    );

    cleanup_env_vars();
}

#[test]
fn test_env_var_substitution_missing_var_fails() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[service]
base_url = "${GITEXPORT_TEST_UNSET_VAR}"
"#,
    );

    let result = load_config(temp_file.path());
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("GITEXPORT_TEST_UNSET_VAR"));
}

#[test]
fn test_env_overrides_take_precedence() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    std::env::set_var("GITEXPORT_SERVICE_BASE_URL", "https://override.example.com");
    std::env::set_var("GITEXPORT_POLLING_INTERVAL_MS", "250");
    std::env::set_var("GITEXPORT_POLLING_TIMEOUT_SECS", "120");

    let temp_file = write_config(
        r#"
[service]
base_url = "https://export.example.com"

[polling]
interval_ms = 2000
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.service.base_url, "https://override.example.com");
    assert_eq!(config.polling.interval_ms, 250);
    assert_eq!(config.polling.timeout_secs, Some(120));

    cleanup_env_vars();
}

#[test]
fn test_invalid_configuration_rejected() {
    let _guard = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "verbose"

[service]
base_url = "https://export.example.com"
"#,
    );

    let result = load_config(temp_file.path());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("log_level"));
}

#[test]
fn test_missing_config_file_rejected() {
    let result = load_config("does-not-exist.toml");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Configuration file not found"));
}
