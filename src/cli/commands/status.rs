//! Status command implementation
//!
//! This module implements the `status` command: a single status fetch for an
//! existing export task, without starting a polling loop.

use crate::adapters::export_api::{ExportApi, HttpExportApi};
use crate::config::load_config;
use crate::core::render::{format_file_size, render_progress};
use crate::domain::{TaskId, TaskState};
use clap::Args;

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Task ID returned when the export was submitted
    pub task_id: String,
}

impl StatusArgs {
    /// Execute the status command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(task_id = %self.task_id, "Checking task status");

        println!("📊 Task Status");
        println!();

        // Load configuration
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let task_id = match TaskId::new(self.task_id.clone()) {
            Ok(task_id) => task_id,
            Err(e) => {
                eprintln!("Invalid task ID: {e}");
                return Ok(2);
            }
        };

        let api = match HttpExportApi::new(&config.service) {
            Ok(api) => api,
            Err(e) => {
                eprintln!("Failed to initialize export client: {e}");
                return Ok(4); // Connection error exit code
            }
        };

        let snapshot = match api.task_status(&task_id).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("❌ Could not fetch task status");
                eprintln!("   Error: {e}");
                return Ok(4);
            }
        };

        println!("  Task:  {task_id}");
        println!("  State: {}", snapshot.state);

        match snapshot.state {
            TaskState::Processing => {
                let label = snapshot.stage.as_deref().unwrap_or("Processing...");
                println!("  Stage: {}", render_progress(label, snapshot.progress));
            }
            TaskState::Success => {
                if let Some(result) = &snapshot.result {
                    println!("  Files: {}", result.file_count);
                    println!("  Size:  {}", format_file_size(result.file_size));
                    println!(
                        "  Download: {}",
                        api.resolve_download_url(&result.download_url)
                    );
                }
            }
            TaskState::Error => {
                if let Some(message) = &snapshot.message {
                    println!("  Message: {message}");
                }
            }
        }

        println!();
        Ok(0)
    }
}
