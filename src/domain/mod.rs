//! Domain models and types for GitExport.
//!
//! This module contains the core domain models, types, and business rules of
//! the export client. All types are designed for type safety, explicit error
//! handling, and API clarity.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`TaskId`], [`RepoSlug`])
//! - **Request and status models** ([`ExportRequest`], [`TaskStatusSnapshot`], [`ExportOutcome`])
//! - **Error types** ([`GitExportError`], [`ServiceError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! GitExport uses the newtype pattern for identifiers to prevent mixing
//! different kinds of strings:
//!
//! ```rust
//! use gitexport::domain::TaskId;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let task_id = TaskId::new("3f2a9c10-88d1")?;
//!
//! // This won't compile - type safety prevents passing a bare string
//! // where a TaskId is expected.
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, GitExportError>`]:
//!
//! ```rust
//! use gitexport::domain::{GitExportError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(GitExportError::Validation("empty repository URL".to_string()))
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod request;
pub mod result;
pub mod status;

// Re-export commonly used types for convenience
pub use errors::{GitExportError, ServiceError};
pub use ids::{RepoSlug, TaskId};
pub use request::{ExportRequest, OutputFormat, OutputMode};
pub use result::Result;
pub use status::{ExportOutcome, ExportResult, TaskState, TaskStatusSnapshot};
