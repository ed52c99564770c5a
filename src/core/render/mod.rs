//! Result presentation
//!
//! Template functions that turn outcome data into user-facing text. Keeping
//! them here leaves the monitor render-agnostic: it hands over data, the
//! caller decides how to show it.

use crate::domain::request::OutputMode;
use crate::domain::status::ExportResult;

/// Formats a byte count for display
///
/// Zero renders as `0 B`; anything else picks the largest fitting unit and
/// renders with two-decimal precision above bytes.
///
/// # Examples
///
/// ```
/// use gitexport::core::render::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1_572_864), "1.50 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}

/// Renders one progress update as a single line
pub fn render_progress(label: &str, progress: Option<f64>) -> String {
    match progress {
        Some(progress) => format!("[{progress:>3.0}%] {label}"),
        None => label.to_string(),
    }
}

/// Renders the terminal success message
///
/// The framing differs between a split-archive result and a single merged
/// file; both surface the artifact expiry window as user-facing text.
pub fn render_success(result: &ExportResult, download_url: &str) -> String {
    let size = format_file_size(result.file_size);

    match result.output_mode {
        OutputMode::Split => format!(
            "Export complete (ZIP archive)\n\
             Processed {} files, archive size {}.\n\
             Download: {}\n\
             The file will be deleted after 30 minutes.",
            result.file_count, size, download_url
        ),
        OutputMode::Single => format!(
            "Export complete\n\
             Processed {} files, {} total.\n\
             Download: {}\n\
             The file will be deleted after 30 minutes.",
            result.file_count, size, download_url
        ),
    }
}

/// Renders the terminal failure message
///
/// Every failure kind funnels into this one shape; retry is a manual user
/// action, so the hint points there.
pub fn render_failure(message: &str) -> String {
    format!("Export failed: {message}\nAdjust the request and try again.")
}
