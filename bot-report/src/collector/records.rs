//! Serialized record shapes.

use crate::issues::Issue;
use serde::{Deserialize, Serialize};

/// An issue filed under a free-form category tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputIssue {
    /// Category label (e.g. "stale").
    pub tag: String,

    /// The tagged issue.
    pub issue: Issue,
}

impl OutputIssue {
    /// Tags an issue.
    pub fn new(tag: impl Into<String>, issue: Issue) -> Self {
        Self {
            tag: tag.into(),
            issue,
        }
    }
}

/// Issues recorded for one repository, in the order observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRepository {
    /// Repository name.
    pub name: String,

    /// Recorded issues.
    pub issues: Vec<OutputIssue>,
}

impl OutputRepository {
    /// Creates a repository with no recorded issues.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            issues: Vec::new(),
        }
    }

    /// Records an issue under `tag`.
    pub fn push(&mut self, tag: impl Into<String>, issue: Issue) {
        self.issues.push(OutputIssue::new(tag, issue));
    }
}
