//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "gitexport.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing GitExport configuration");
        println!();

        // Check if file already exists
        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} and point service.base_url at your export service", self.output);
                println!("  2. Validate configuration: gitexport validate-config");
                println!("  3. Run an export: gitexport export https://github.com/<owner>/<repo>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# GitExport Configuration File
# Client for a repository export service

[application]
log_level = "info"

[service]
base_url = "http://localhost:5000"
timeout_seconds = 30

[polling]
interval_ms = 2000
stage_interval_ms = 1500

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# GitExport Configuration File
# Client for a repository export service
#
# This file contains all configuration options with examples and explanations.

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

# ============================================================================
# Export Service
# ============================================================================
[service]
# Base URL of the export service
base_url = "http://localhost:5000"

# Per-request timeout in seconds
timeout_seconds = 30

# ============================================================================
# Polling
# ============================================================================
[polling]
# Interval between status polls in milliseconds.
# The cadence is fixed; there is no backoff or jitter.
interval_ms = 2000

# Interval between simulated stage labels while the submit request is in
# flight, in milliseconds
stage_interval_ms = 1500

# Optional overall polling bound in seconds. When unset, polling continues
# until the service reports success or error.
# timeout_secs = 600

# ============================================================================
# Logging
# ============================================================================
[logging]
# Enable local file logging (JSON lines)
local_enabled = false

# Directory for local log files
local_path = "logs"

# Log rotation (daily or hourly)
local_rotation = "daily"
"#
        .to_string()
    }
}
