//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::GitExportConfig;
use crate::domain::errors::GitExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into GitExportConfig
/// 4. Applies environment variable overrides (GITEXPORT_* prefix)
/// 5. Validates the configuration
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use gitexport::config::loader::load_config;
///
/// let config = load_config("gitexport.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<GitExportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(GitExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        GitExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: GitExportConfig = toml::from_str(&contents)
        .map_err(|e| GitExportError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        GitExportError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(GitExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the GITEXPORT_* prefix
///
/// Environment variables follow the pattern: GITEXPORT_<SECTION>_<KEY>
/// For example: GITEXPORT_SERVICE_BASE_URL, GITEXPORT_POLLING_INTERVAL_MS
fn apply_env_overrides(config: &mut GitExportConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("GITEXPORT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Service overrides
    if let Ok(val) = std::env::var("GITEXPORT_SERVICE_BASE_URL") {
        config.service.base_url = val;
    }
    if let Ok(val) = std::env::var("GITEXPORT_SERVICE_TIMEOUT_SECONDS") {
        if let Ok(timeout) = val.parse() {
            config.service.timeout_seconds = timeout;
        }
    }

    // Polling overrides
    if let Ok(val) = std::env::var("GITEXPORT_POLLING_INTERVAL_MS") {
        if let Ok(interval) = val.parse() {
            config.polling.interval_ms = interval;
        }
    }
    if let Ok(val) = std::env::var("GITEXPORT_POLLING_STAGE_INTERVAL_MS") {
        if let Ok(interval) = val.parse() {
            config.polling.stage_interval_ms = interval;
        }
    }
    if let Ok(val) = std::env::var("GITEXPORT_POLLING_TIMEOUT_SECS") {
        if let Ok(timeout) = val.parse() {
            config.polling.timeout_secs = Some(timeout);
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("GITEXPORT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("GITEXPORT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
