//! Local input validation
//!
//! Every export request is validated here before anything touches the
//! network; the HTTP layer assumes its input is already pattern-valid.
//! Limits mirror what the export service enforces on its side.

use crate::domain::errors::GitExportError;
use crate::domain::ids::RepoSlug;
use crate::domain::request::{ExportRequest, OutputFormat, OutputMode};
use crate::domain::result::Result;
use regex::Regex;

/// Maximum length of any single request parameter
pub const MAX_PARAM_LENGTH: usize = 128;

/// Maximum number of items in a comma-separated list parameter
pub const MAX_PARAM_ITEMS: usize = 20;

/// Raw, unvalidated user input as collected from the CLI
#[derive(Debug, Clone, Default)]
pub struct RawExportParams {
    /// Repository URL as typed by the user
    pub repo_url: String,

    /// Comma-separated file extensions to include
    pub file_types: String,

    /// Comma-separated file names to exclude
    pub exclude_names: String,

    /// Comma-separated directory names to exclude
    pub exclude_dirs: String,

    /// Requested output format (empty = default)
    pub output_format: String,

    /// Requested output mode (empty = default)
    pub output_mode: String,

    /// Whether to apply the service's built-in exclusion lists
    pub use_default_filters: bool,
}

/// Validates a GitHub repository URL
///
/// The URL must match `https://github.com/<owner>/<repo>`; a trailing slash
/// is stripped from the returned value.
///
/// # Errors
///
/// Returns a `Validation` error if the URL is empty, too long, does not
/// match the repository pattern, or contains path traversal sequences.
pub fn validate_repo_url(repo_url: &str) -> Result<(String, RepoSlug)> {
    let repo_url = repo_url.trim();

    if repo_url.is_empty() {
        return Err(GitExportError::Validation(
            "Repository URL must not be empty".to_string(),
        ));
    }

    if repo_url.len() > MAX_PARAM_LENGTH {
        return Err(GitExportError::Validation(format!(
            "Repository URL must not exceed {MAX_PARAM_LENGTH} characters"
        )));
    }

    // Reject traversal sequences before looking at the shape
    if repo_url.contains("..") || repo_url.contains("./") {
        return Err(GitExportError::Validation(
            "Repository URL contains illegal path characters".to_string(),
        ));
    }

    let pattern = Regex::new(r"^https://github\.com/[\w\-.]+/[\w\-.]+/?$").unwrap();
    if !pattern.is_match(repo_url) {
        return Err(GitExportError::Validation(
            "Invalid GitHub repository URL, expected https://github.com/<owner>/<repo>"
                .to_string(),
        ));
    }

    let normalized = repo_url.trim_end_matches('/').to_string();
    let mut parts = normalized.rsplit('/');
    let repo = parts.next().unwrap_or_default();
    let owner = parts.next().unwrap_or_default();

    let slug = RepoSlug::new(owner, repo).map_err(GitExportError::Validation)?;

    Ok((normalized, slug))
}

/// Validates the file type filter
///
/// Extensions are trimmed, lowercased, and stripped of a leading dot;
/// each must be purely alphanumeric.
pub fn validate_file_types(file_types: &str) -> Result<Vec<String>> {
    let file_types = file_types.trim();
    if file_types.is_empty() {
        return Ok(Vec::new());
    }

    if file_types.len() > MAX_PARAM_LENGTH {
        return Err(GitExportError::Validation(format!(
            "File type filter must not exceed {MAX_PARAM_LENGTH} characters"
        )));
    }

    let types: Vec<String> = file_types
        .split(',')
        .map(|t| t.trim().to_lowercase().trim_start_matches('.').to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if types.len() > MAX_PARAM_ITEMS {
        return Err(GitExportError::Validation(format!(
            "File type filter must not list more than {MAX_PARAM_ITEMS} extensions"
        )));
    }

    let ext_pattern = Regex::new(r"^[a-zA-Z0-9]+$").unwrap();
    for ext in &types {
        if !ext_pattern.is_match(ext) {
            return Err(GitExportError::Validation(format!(
                "Invalid file extension: {ext}"
            )));
        }
    }

    Ok(types)
}

/// Validates the excluded file name filter
pub fn validate_exclude_names(exclude_names: &str) -> Result<Vec<String>> {
    validate_name_list(exclude_names, "Excluded file name filter")
}

/// Validates the excluded directory filter
pub fn validate_exclude_dirs(exclude_dirs: &str) -> Result<Vec<String>> {
    validate_name_list(exclude_dirs, "Excluded directory filter")
}

fn validate_name_list(raw: &str, label: &str) -> Result<Vec<String>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    if raw.len() > MAX_PARAM_LENGTH {
        return Err(GitExportError::Validation(format!(
            "{label} must not exceed {MAX_PARAM_LENGTH} characters"
        )));
    }

    let names: Vec<String> = raw
        .split(',')
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();

    if names.len() > MAX_PARAM_ITEMS {
        return Err(GitExportError::Validation(format!(
            "{label} must not list more than {MAX_PARAM_ITEMS} items"
        )));
    }

    Ok(names)
}

/// Validates the output format parameter
///
/// An empty value selects the default format.
pub fn validate_output_format(output_format: &str) -> Result<OutputFormat> {
    if output_format.trim().is_empty() {
        return Ok(OutputFormat::default());
    }
    output_format
        .parse()
        .map_err(GitExportError::Validation)
}

/// Validates the output mode parameter
///
/// An empty value selects the default mode.
pub fn validate_output_mode(output_mode: &str) -> Result<OutputMode> {
    if output_mode.trim().is_empty() {
        return Ok(OutputMode::default());
    }
    output_mode.parse().map_err(GitExportError::Validation)
}

/// Validates all request parameters and assembles an [`ExportRequest`]
///
/// # Errors
///
/// Returns the first `Validation` error encountered; nothing is submitted
/// when this fails.
pub fn validate_params(params: &RawExportParams) -> Result<ExportRequest> {
    let (repo_url, slug) = validate_repo_url(&params.repo_url)?;

    tracing::debug!(
        owner = slug.owner(),
        repo = slug.repo(),
        "Repository URL validated"
    );

    let request = ExportRequest::new(repo_url)
        .with_file_types(validate_file_types(&params.file_types)?)
        .with_exclude_names(validate_exclude_names(&params.exclude_names)?)
        .with_exclude_dirs(validate_exclude_dirs(&params.exclude_dirs)?)
        .with_output_format(validate_output_format(&params.output_format)?)
        .with_output_mode(validate_output_mode(&params.output_mode)?)
        .with_default_filters(params.use_default_filters);

    Ok(request)
}
