//! Export command implementation
//!
//! This module implements the `export` command: validate the request
//! locally, submit it to the export service, then watch the task until it
//! reaches a terminal state.

use crate::adapters::export_api::HttpExportApi;
use crate::config::load_config;
use crate::core::monitor::{ProgressSink, TaskMonitor};
use crate::core::render::{render_failure, render_progress, render_success};
use crate::core::validate::{validate_params, RawExportParams};
use crate::domain::{ExportOutcome, GitExportError, ServiceError, TaskId};
use clap::Args;
use std::sync::Arc;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// GitHub repository URL (https://github.com/<owner>/<repo>)
    #[arg(required_unless_present = "task_id")]
    pub repo_url: Option<String>,

    /// Comma-separated file extensions to include (e.g. "rs,toml")
    #[arg(long, default_value = "")]
    pub file_types: String,

    /// Comma-separated file names to exclude
    #[arg(long, default_value = "")]
    pub exclude_names: String,

    /// Comma-separated directory names to exclude
    #[arg(long, default_value = "")]
    pub exclude_dirs: String,

    /// Output format (txt or md)
    #[arg(long, default_value = "md")]
    pub format: String,

    /// Output mode (single merged file or split ZIP archive)
    #[arg(long, default_value = "single")]
    pub mode: String,

    /// Apply the service's built-in exclusion lists
    #[arg(long)]
    pub use_default_filters: bool,

    /// Watch an already-submitted task instead of submitting a new one
    #[arg(long)]
    pub task_id: Option<String>,
}

/// Progress sink that prints updates to the terminal
struct CliProgressSink;

impl ProgressSink for CliProgressSink {
    fn stage(&mut self, label: &str, progress: Option<f64>) {
        println!("⏳ {}", render_progress(label, progress));
    }
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // Create the service client
        let api = match HttpExportApi::new(&config.service) {
            Ok(api) => Arc::new(api),
            Err(e) => {
                tracing::error!(error = %e, "Failed to create export service client");
                eprintln!("Failed to initialize export client: {e}");
                return Ok(4); // Connection error exit code
            }
        };
        let monitor = TaskMonitor::new(api.clone(), &config.polling);
        let mut sink = CliProgressSink;

        // Either resume watching an existing task or submit a new one
        let task_id = match &self.task_id {
            Some(raw) => match TaskId::new(raw.clone()) {
                Ok(task_id) => {
                    println!("🔁 Watching existing task {task_id}");
                    task_id
                }
                Err(e) => {
                    eprintln!("Invalid task ID: {e}");
                    return Ok(2);
                }
            },
            None => {
                // Validate locally before anything touches the network
                let params = RawExportParams {
                    repo_url: self.repo_url.clone().unwrap_or_default(),
                    file_types: self.file_types.clone(),
                    exclude_names: self.exclude_names.clone(),
                    exclude_dirs: self.exclude_dirs.clone(),
                    output_format: self.format.clone(),
                    output_mode: self.mode.clone(),
                    use_default_filters: self.use_default_filters,
                };

                let request = match validate_params(&params) {
                    Ok(request) => request,
                    Err(e) => {
                        tracing::warn!(error = %e, "Request rejected locally");
                        eprintln!("❌ {e}");
                        return Ok(2);
                    }
                };

                println!("🚀 Submitting export request for {}", request.repo_url);
                println!();

                match monitor.submit_with_progress(&request, &mut sink).await {
                    Ok(task_id) => {
                        println!();
                        println!("📦 Export task created: {task_id}");
                        task_id
                    }
                    Err(e) => {
                        println!();
                        eprintln!("{}", render_failure(&user_message(&e)));
                        return Ok(submit_exit_code(&e));
                    }
                }
            }
        };

        // Poll until the task terminates or the user interrupts
        let outcome = monitor.watch(&task_id, &mut sink, shutdown_signal).await;

        println!();
        match outcome {
            None => {
                println!("⚠️  Export watch cancelled. The task may still finish on the server.");
                println!("   Resume with: gitexport export --task-id {task_id}");
                tracing::info!(task_id = %task_id, "Watch interrupted by user signal");
                Ok(130) // SIGINT exit code (standard Unix convention)
            }
            Some(ExportOutcome::Completed(result)) => {
                let download_url = api.resolve_download_url(&result.download_url);
                println!("✅ {}", render_success(&result, &download_url));
                Ok(0)
            }
            Some(ExportOutcome::Failed { message }) => {
                eprintln!("❌ {}", render_failure(&message));
                Ok(1)
            }
        }
    }
}

/// The single human-readable message shown for a failed submission
fn user_message(error: &GitExportError) -> String {
    match error {
        GitExportError::Service(service_error) => service_error.user_message(),
        other => other.to_string(),
    }
}

/// Exit code for a failed submission, by error kind
fn submit_exit_code(error: &GitExportError) -> i32 {
    match error {
        GitExportError::Validation(_) | GitExportError::Configuration(_) => 2,
        GitExportError::Service(ServiceError::ConnectionFailed(_)) => 4,
        _ => 1,
    }
}
