//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for identifiers used by the export
//! client. Each type ensures type safety and provides validation for format
//! compliance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task identifier newtype wrapper
///
/// Represents the opaque handle the export service issues for one export job.
/// The value is server-defined; the client only requires it to be non-empty.
/// It is created from the submit response and dropped when polling ends.
///
/// # Examples
///
/// ```
/// use gitexport::domain::ids::TaskId;
/// use std::str::FromStr;
///
/// let task_id = TaskId::from_str("3f2a9c10-88d1-4a6e-9a57-1f3cbb0f7d41").unwrap();
/// assert_eq!(task_id.as_str(), "3f2a9c10-88d1-4a6e-9a57-1f3cbb0f7d41");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a new TaskId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The task identifier string
    ///
    /// # Returns
    ///
    /// Returns `Ok(TaskId)` if the ID is non-empty, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Task ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the task ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Repository slug: the `{owner}/{repo}` pair extracted from a repository URL
///
/// Both segments are validated elsewhere against the GitHub name character
/// set; this type only guards against empty segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoSlug {
    owner: String,
    repo: String,
}

impl RepoSlug {
    /// Creates a new RepoSlug from owner and repository names
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Result<Self, String> {
        let owner = owner.into();
        let repo = repo.into();
        if owner.trim().is_empty() {
            return Err("Repository owner cannot be empty".to_string());
        }
        if repo.trim().is_empty() {
            return Err("Repository name cannot be empty".to_string());
        }
        Ok(Self { owner, repo })
    }

    /// The repository owner (user or organization)
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// The repository name
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
