//! Task status model
//!
//! This module defines the decoded shape of one status poll and the terminal
//! outcome handed to the presentation layer.

use crate::domain::request::OutputMode;
use serde::Deserialize;

/// Reported state of an export job
///
/// Any value other than `processing` is terminal. Unknown strings decode as
/// `Error` so that a misbehaving service still terminates the polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    /// The job is still running
    Processing,
    /// The job finished and produced a downloadable artifact
    Success,
    /// The job failed (also covers unrecognized status values)
    #[serde(other)]
    Error,
}

impl TaskState {
    /// Whether polling stops at this state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskState::Processing)
    }

    /// The wire representation of this state
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Processing => "processing",
            TaskState::Success => "success",
            TaskState::Error => "error",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result payload of a successfully completed export
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportResult {
    /// Number of files merged into the bundle
    pub file_count: u64,

    /// Size of the produced artifact in bytes
    pub file_size: u64,

    /// Where the artifact can be fetched (may be relative to the service URL)
    pub download_url: String,

    /// Packaging mode the service applied; absent means single-file
    #[serde(default)]
    pub output_mode: OutputMode,
}

/// One decoded status poll
///
/// Exists only for the duration of one poll cycle; nothing is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskStatusSnapshot {
    /// Reported job state
    #[serde(rename = "status")]
    pub state: TaskState,

    /// Human-readable stage label while processing
    #[serde(default)]
    pub stage: Option<String>,

    /// Progress percentage (0-100) while processing
    #[serde(default)]
    pub progress: Option<f64>,

    /// Result payload, present on success
    #[serde(default)]
    pub result: Option<ExportResult>,

    /// Error message, present on failure
    #[serde(default)]
    pub message: Option<String>,
}

/// Terminal outcome of one export job
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The job succeeded with a downloadable result
    Completed(ExportResult),
    /// The job failed; `message` is the single string surfaced to the user
    Failed {
        /// Human-readable failure message
        message: String,
    },
}

impl ExportOutcome {
    /// Creates a failed outcome from any displayable message
    pub fn failed(message: impl Into<String>) -> Self {
        ExportOutcome::Failed {
            message: message.into(),
        }
    }

    /// Whether the export completed successfully
    pub fn is_success(&self) -> bool {
        matches!(self, ExportOutcome::Completed(_))
    }
}
