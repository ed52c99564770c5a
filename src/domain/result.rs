//! Result type alias for GitExport
//!
//! This module provides a convenient Result type alias that uses GitExportError
//! as the error type.

use super::errors::GitExportError;

/// Result type alias for GitExport operations
///
/// This is a convenience type alias that uses `GitExportError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use gitexport::domain::result::Result;
/// use gitexport::domain::errors::GitExportError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(GitExportError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, GitExportError>;
