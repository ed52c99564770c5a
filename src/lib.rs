// GitExport - Repository Export Client
// Copyright (c) 2025 GitExport Contributors
// Licensed under the MIT License

//! # GitExport - Repository Export Client
//!
//! GitExport is a command-line client for a repository export service: it
//! submits a GitHub repository export request, polls the service for the
//! job's status, and renders the terminal outcome.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Validating** export parameters locally before anything is submitted
//! - **Submitting** export jobs over HTTP and obtaining a task handle
//! - **Polling** job status on a fixed interval until a terminal state
//! - **Rendering** progress updates and terminal results for display
//!
//! ## Architecture
//!
//! GitExport follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (validation, task monitoring, rendering)
//! - [`adapters`] - The export service HTTP integration
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitexport::adapters::export_api::HttpExportApi;
//! use gitexport::config::load_config;
//! use gitexport::core::monitor::{ProgressSink, TaskMonitor};
//! use gitexport::domain::ExportRequest;
//! use std::sync::Arc;
//! use tokio::sync::watch;
//!
//! struct PrintSink;
//!
//! impl ProgressSink for PrintSink {
//!     fn stage(&mut self, label: &str, _progress: Option<f64>) {
//!         println!("{label}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load configuration
//!     let config = load_config("gitexport.toml")?;
//!
//!     // Build the client and monitor
//!     let api = Arc::new(HttpExportApi::new(&config.service)?);
//!     let monitor = TaskMonitor::new(api, &config.polling);
//!
//!     // Submit and watch
//!     let request = ExportRequest::new("https://github.com/acme/repo");
//!     let mut sink = PrintSink;
//!     let task_id = monitor.submit_with_progress(&request, &mut sink).await?;
//!
//!     let (_cancel_tx, cancel_rx) = watch::channel(false);
//!     let outcome = monitor.watch(&task_id, &mut sink, cancel_rx).await;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! GitExport uses the [`domain::GitExportError`] type for all errors:
//!
//! ```rust,no_run
//! use gitexport::domain::GitExportError;
//!
//! fn example() -> Result<(), GitExportError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = gitexport::config::load_config("gitexport.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! GitExport uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Submitting export request");
//! warn!(task_id = "abc", "Status poll failed");
//! error!(error = "connection refused", "Submission failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
