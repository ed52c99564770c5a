//! Export request model
//!
//! This module defines the immutable value object describing one export job,
//! as assembled from validated user input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported output formats for the merged bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text bundle
    Txt,
    /// Markdown bundle with fenced code blocks
    #[default]
    Md,
}

impl OutputFormat {
    /// Formats accepted by the export service
    pub const SUPPORTED: [&'static str; 2] = ["txt", "md"];

    /// The wire representation of this format
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Txt => "txt",
            OutputFormat::Md => "md",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" => Ok(OutputFormat::Txt),
            "md" => Ok(OutputFormat::Md),
            other => Err(format!(
                "Unsupported output format: {other}. Supported formats: {}",
                Self::SUPPORTED.join(", ")
            )),
        }
    }
}

/// Output packaging mode
///
/// `Single` merges everything into one downloadable file; `Split` produces a
/// ZIP archive of size-bounded parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// One merged output file
    #[default]
    Single,
    /// Multiple parts packaged as a ZIP archive
    Split,
}

impl OutputMode {
    /// The wire representation of this mode
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Single => "single",
            OutputMode::Split => "split",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(OutputMode::Single),
            "split" => Ok(OutputMode::Split),
            other => Err(format!(
                "Unsupported output mode: {other}. Supported modes: single, split"
            )),
        }
    }
}

/// One export job request, built from validated user input
///
/// The repository URL is expected to be pattern-valid and normalized (no
/// trailing slash) before this struct is constructed; the HTTP client does
/// not re-validate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Validated repository URL (`https://github.com/<owner>/<repo>`)
    pub repo_url: String,

    /// File extensions to include (empty = all text files)
    pub file_types: Vec<String>,

    /// File names to exclude
    pub exclude_names: Vec<String>,

    /// Directory names to exclude
    pub exclude_dirs: Vec<String>,

    /// Output format of the merged bundle
    pub output_format: OutputFormat,

    /// Output packaging mode
    pub output_mode: OutputMode,

    /// Whether the service should apply its built-in exclusion lists
    pub use_default_filters: bool,
}

impl ExportRequest {
    /// Creates a request with default filters and formats
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            file_types: Vec::new(),
            exclude_names: Vec::new(),
            exclude_dirs: Vec::new(),
            output_format: OutputFormat::default(),
            output_mode: OutputMode::default(),
            use_default_filters: false,
        }
    }

    /// Sets the file type filter
    pub fn with_file_types(mut self, file_types: Vec<String>) -> Self {
        self.file_types = file_types;
        self
    }

    /// Sets the excluded file names
    pub fn with_exclude_names(mut self, exclude_names: Vec<String>) -> Self {
        self.exclude_names = exclude_names;
        self
    }

    /// Sets the excluded directories
    pub fn with_exclude_dirs(mut self, exclude_dirs: Vec<String>) -> Self {
        self.exclude_dirs = exclude_dirs;
        self
    }

    /// Sets the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Sets the output mode
    pub fn with_output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    /// Enables or disables the service's default filter lists
    pub fn with_default_filters(mut self, enabled: bool) -> Self {
        self.use_default_filters = enabled;
        self
    }
}
