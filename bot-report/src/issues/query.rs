//! Query results grouped by repository.

use super::{Issue, IssueError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Issues matched in a single repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryIssues {
    /// Repository name (e.g. "owner/repo").
    pub name: String,

    /// Matched issues, in the order the source returned them.
    #[serde(default)]
    pub issues: Vec<Issue>,
}

/// Full result set of one upstream query run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueQuery {
    /// Repositories in query order.
    #[serde(default)]
    pub repositories: Vec<RepositoryIssues>,
}

impl IssueQuery {
    /// Loads query results from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`IssueError`] if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self, IssueError> {
        debug!(path = %path.display(), "Loading issue query");

        let content = std::fs::read_to_string(path).map_err(|e| IssueError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content).map_err(|e| IssueError::ParseError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Parses query results from JSON text.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Total number of issues across all repositories.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.repositories.iter().map(|r| r.issues.len()).sum()
    }
}
