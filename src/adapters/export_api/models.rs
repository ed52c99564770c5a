//! Wire models for the export service API
//!
//! These types mirror the JSON bodies exchanged with the export service.
//! They stay private to the adapter layer; callers work with the domain
//! types instead.

use crate::domain::request::ExportRequest;
use serde::{Deserialize, Serialize};

/// Body of `POST /download`
///
/// The service expects the filter lists as comma-separated strings, the way
/// its own form encoding delivers them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmitPayload {
    /// Validated repository URL
    pub repo_url: String,

    /// Comma-separated file extensions to include
    pub file_types: String,

    /// Comma-separated file names to exclude
    pub exclude_names: String,

    /// Comma-separated directory names to exclude
    pub exclude_dirs: String,

    /// Output format (`txt` or `md`)
    pub output_format: String,

    /// Output mode (`single` or `split`)
    pub output_mode: String,

    /// Whether the service applies its built-in exclusion lists
    pub use_default_filters: bool,
}

impl From<&ExportRequest> for SubmitPayload {
    fn from(request: &ExportRequest) -> Self {
        Self {
            repo_url: request.repo_url.clone(),
            file_types: request.file_types.join(","),
            exclude_names: request.exclude_names.join(","),
            exclude_dirs: request.exclude_dirs.join(","),
            output_format: request.output_format.to_string(),
            output_mode: request.output_mode.to_string(),
            use_default_filters: request.use_default_filters,
        }
    }
}

/// Body of the `POST /download` response
///
/// A successful submission carries `task_id`; a rejection carries `message`.
/// Both are optional on the wire, so acceptance is decided by the caller.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SubmitResponse {
    /// Handle of the created export job
    #[serde(default)]
    pub task_id: Option<String>,

    /// Server-supplied rejection message
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::request::{OutputFormat, OutputMode};

    #[test]
    fn test_payload_from_request() {
        let request = ExportRequest::new("https://github.com/acme/repo")
            .with_file_types(vec!["rs".to_string(), "md".to_string()])
            .with_exclude_dirs(vec!["target".to_string()])
            .with_output_format(OutputFormat::Txt)
            .with_output_mode(OutputMode::Split)
            .with_default_filters(true);

        let payload = SubmitPayload::from(&request);
        assert_eq!(payload.repo_url, "https://github.com/acme/repo");
        assert_eq!(payload.file_types, "rs,md");
        assert_eq!(payload.exclude_names, "");
        assert_eq!(payload.exclude_dirs, "target");
        assert_eq!(payload.output_format, "txt");
        assert_eq!(payload.output_mode, "split");
        assert!(payload.use_default_filters);
    }

    #[test]
    fn test_payload_serializes_expected_fields() {
        let request = ExportRequest::new("https://github.com/acme/repo");
        let value = serde_json::to_value(SubmitPayload::from(&request)).unwrap();

        let object = value.as_object().unwrap();
        for field in [
            "repo_url",
            "file_types",
            "exclude_names",
            "exclude_dirs",
            "output_format",
            "output_mode",
            "use_default_filters",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }

    #[test]
    fn test_submit_response_decodes_empty_object() {
        let response: SubmitResponse = serde_json::from_str("{}").unwrap();
        assert!(response.task_id.is_none());
        assert!(response.message.is_none());
    }

    #[test]
    fn test_submit_response_decodes_task_id() {
        let response: SubmitResponse = serde_json::from_str(r#"{"task_id": "abc"}"#).unwrap();
        assert_eq!(response.task_id.as_deref(), Some("abc"));
    }
}
