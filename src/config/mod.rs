//! Configuration management for GitExport.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! GitExport uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Environment variable overrides (`GITEXPORT_*` prefix)
//! - Default values for optional settings
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gitexport::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("gitexport.toml")?;
//!
//! println!("Export service: {}", config.service.base_url);
//! println!("Poll interval: {}ms", config.polling.interval_ms);
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [service]
//! base_url = "https://export.example.com"
//! timeout_seconds = 30
//!
//! [polling]
//! interval_ms = 2000
//! stage_interval_ms = 1500
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{
    ApplicationConfig, GitExportConfig, LoggingConfig, PollingConfig, ServiceConfig,
};
