//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the GitExport configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after parsing
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Export Service: {}", config.service.base_url);
        println!("  Request Timeout: {}s", config.service.timeout_seconds);
        println!("  Poll Interval: {}ms", config.polling.interval_ms);
        println!("  Stage Interval: {}ms", config.polling.stage_interval_ms);
        match config.polling.timeout_secs {
            Some(timeout) => println!("  Poll Timeout: {timeout}s"),
            None => println!("  Poll Timeout: none (poll until the service answers)"),
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                &config.logging.local_path
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}
