//! Export service adapter
//!
//! This module defines the [`ExportApi`] trait that abstracts the export
//! service's HTTP interface, and the reqwest-backed implementation used in
//! production. The trait is the seam that lets the polling logic be driven
//! against scripted services in tests.

pub mod client;
pub mod models;

pub use client::HttpExportApi;

use crate::domain::ids::TaskId;
use crate::domain::request::ExportRequest;
use crate::domain::status::TaskStatusSnapshot;
use crate::domain::Result;
use async_trait::async_trait;

/// Interface to the export service
///
/// One implementation call maps to one HTTP request: `submit_export` issues
/// the job-creation request, `task_status` performs a single poll tick.
///
/// # Example
///
/// ```no_run
/// use gitexport::adapters::export_api::{ExportApi, HttpExportApi};
/// use gitexport::config::ServiceConfig;
/// use gitexport::domain::ExportRequest;
///
/// # async fn example() -> gitexport::domain::Result<()> {
/// let api = HttpExportApi::new(&ServiceConfig::default())?;
/// let task_id = api
///     .submit_export(&ExportRequest::new("https://github.com/acme/repo"))
///     .await?;
/// println!("Task created: {task_id}");
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ExportApi: Send + Sync {
    /// Submit an export request and return the created task handle
    ///
    /// The request is expected to be pre-validated; this method performs no
    /// input validation of its own.
    ///
    /// # Errors
    ///
    /// - `ServiceError::ConnectionFailed` if no response was received
    /// - `ServiceError::TaskRejected` if the service answered without a
    ///   task identifier or with a non-success status
    async fn submit_export(&self, request: &ExportRequest) -> Result<TaskId>;

    /// Fetch the current status of an export task
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::StatusUnavailable` if the poll could not be
    /// completed; the caller treats that as a terminal failure.
    async fn task_status(&self, task_id: &TaskId) -> Result<TaskStatusSnapshot>;
}
