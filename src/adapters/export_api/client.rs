//! HTTP implementation of the export service API
//!
//! This module provides the reqwest-backed [`ExportApi`] implementation used
//! against a real export service.

use super::models::{SubmitPayload, SubmitResponse};
use super::ExportApi;
use crate::config::ServiceConfig;
use crate::domain::ids::TaskId;
use crate::domain::request::ExportRequest;
use crate::domain::status::TaskStatusSnapshot;
use crate::domain::{GitExportError, Result, ServiceError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use url::Url;

/// Fallback message when the service rejects a submission without saying why
const REJECTED_FALLBACK: &str = "Failed to start export task";

/// HTTP client for the export service
///
/// One instance drives all requests of one client lifecycle: the submit call
/// and every status poll. The instance holds no per-task state; the task
/// handle is passed in by the caller.
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
/// let request = ExportRequest::new("https://github.com/acme/repo");
/// let task_id = api.submit_export(&request).await?;
/// let snapshot = api.task_status(&task_id).await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpExportApi {
    /// Base URL of the export service
    base_url: String,

    /// HTTP client for making requests
    client: Client,
}

impl HttpExportApi {
    /// Create a new export service client from configuration
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                GitExportError::Configuration(format!("Failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL of the export service
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a possibly-relative download URL against the service base URL
    ///
    /// The service reports artifact locations as paths like
    /// `/files/repo_merged.md`; absolute URLs pass through unchanged.
    pub fn resolve_download_url(&self, raw: &str) -> String {
        if Url::parse(raw).is_ok() {
            return raw.to_string();
        }
        match Url::parse(&self.base_url).and_then(|base| base.join(raw)) {
            Ok(joined) => joined.to_string(),
            Err(_) => format!("{}{}", self.base_url, raw),
        }
    }
}

#[async_trait]
impl ExportApi for HttpExportApi {
    async fn submit_export(&self, request: &ExportRequest) -> Result<TaskId> {
        let url = format!("{}/download", self.base_url);
        let payload = SubmitPayload::from(request);

        tracing::info!(
            repo_url = %payload.repo_url,
            output_format = %payload.output_format,
            output_mode = %payload.output_mode,
            "Submitting export request"
        );

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ServiceError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::ConnectionFailed(e.to_string()))?;

        // The rejection message rides in the body for both non-2xx responses
        // and 2xx responses that lack a task_id.
        let decoded: SubmitResponse = serde_json::from_str(&body).unwrap_or_default();

        if status.is_success() {
            if let Some(task_id) = decoded.task_id {
                let task_id = TaskId::new(task_id)
                    .map_err(ServiceError::InvalidResponse)?;
                tracing::info!(task_id = %task_id, "Export task created");
                return Ok(task_id);
            }
        }

        let message = decoded
            .message
            .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
        tracing::warn!(status = %status, message = %message, "Export request rejected");
        Err(ServiceError::TaskRejected { message }.into())
    }

    async fn task_status(&self, task_id: &TaskId) -> Result<TaskStatusSnapshot> {
        let url = format!("{}/status/{}", self.base_url, task_id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(task_id = %task_id, error = %e, "Status poll failed");
            ServiceError::StatusUnavailable
        })?;

        // The service reports terminal errors as JSON bodies regardless of
        // the HTTP status code, so decode before judging the status line.
        response.json::<TaskStatusSnapshot>().await.map_err(|e| {
            tracing::warn!(task_id = %task_id, error = %e, "Status response unreadable");
            GitExportError::Service(ServiceError::StatusUnavailable)
        })
    }
}
