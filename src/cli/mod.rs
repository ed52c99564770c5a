//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for GitExport using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// GitExport - repository export client
#[derive(Parser, Debug)]
#[command(name = "gitexport")]
#[command(version, about, long_about = None)]
#[command(author = "GitExport Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "gitexport.toml", env = "GITEXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "GITEXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit an export request and watch it to completion
    Export(commands::export::ExportArgs),

    /// Show the current status of an export task
    Status(commands::status::StatusArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
