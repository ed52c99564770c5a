//! Configuration schema types
//!
//! This module defines the configuration structure for GitExport.

use serde::{Deserialize, Serialize};

/// Main GitExport configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitExportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Export service endpoint configuration
    pub service: ServiceConfig,

    /// Polling cadence configuration
    #[serde(default)]
    pub polling: PollingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GitExportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.service.validate()?;
        self.polling.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Export service endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the export service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ServiceConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.trim().is_empty() {
            return Err("service.base_url must not be empty".to_string());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "service.base_url must start with http:// or https://, got '{}'",
                self.base_url
            ));
        }
        if self.timeout_seconds == 0 {
            return Err("service.timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Polling cadence configuration
///
/// The status poll runs on a fixed interval with no backoff or jitter; the
/// stage interval drives the cosmetic progress labels shown while the submit
/// request is in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollingConfig {
    /// Interval between status polls in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub interval_ms: u64,

    /// Interval between simulated stage labels in milliseconds
    #[serde(default = "default_stage_interval_ms")]
    pub stage_interval_ms: u64,

    /// Optional overall polling bound in seconds; unset polls until the
    /// service reports a terminal state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl PollingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.interval_ms == 0 {
            return Err("polling.interval_ms must be greater than 0".to_string());
        }
        if self.stage_interval_ms == 0 {
            return Err("polling.stage_interval_ms must be greater than 0".to_string());
        }
        if let Some(timeout) = self.timeout_secs {
            if timeout == 0 {
                return Err("polling.timeout_secs must be greater than 0 when set".to_string());
            }
        }
        Ok(())
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_poll_interval_ms(),
            stage_interval_ms: default_stage_interval_ms(),
            timeout_secs: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log rotation (daily or hourly)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_stage_interval_ms() -> u64 {
    1500
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GitExportConfig {
            application: ApplicationConfig::default(),
            service: ServiceConfig::default(),
            polling: PollingConfig::default(),
            logging: LoggingConfig::default(),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.polling.interval_ms, 2000);
        assert_eq!(config.polling.stage_interval_ms, 1500);
        assert_eq!(config.service.timeout_seconds, 30);
        assert!(config.polling.timeout_secs.is_none());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let config = ApplicationConfig {
            log_level: "verbose".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_base_url_scheme_required() {
        let config = ServiceConfig {
            base_url: "export.example.com".to_string(),
            timeout_seconds: 30,
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("http://"));
    }

    #[test]
    fn test_zero_intervals_rejected() {
        let config = PollingConfig {
            interval_ms: 0,
            stage_interval_ms: 1500,
            timeout_secs: None,
        };
        assert!(config.validate().is_err());

        let config = PollingConfig {
            interval_ms: 2000,
            stage_interval_ms: 0,
            timeout_secs: None,
        };
        assert!(config.validate().is_err());

        let config = PollingConfig {
            interval_ms: 2000,
            stage_interval_ms: 1500,
            timeout_secs: Some(0),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_rotation_rejected() {
        let config = LoggingConfig {
            local_enabled: true,
            local_path: "logs".to_string(),
            local_rotation: "weekly".to_string(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_minimal_toml_parses_with_defaults() {
        let config: GitExportConfig = toml::from_str(
            r#"
[service]
base_url = "https://export.example.com"
"#,
        )
        .unwrap();

        assert_eq!(config.service.base_url, "https://export.example.com");
        assert_eq!(config.application.log_level, "info");
        assert_eq!(config.polling.interval_ms, 2000);
        assert!(!config.logging.local_enabled);
    }
}
