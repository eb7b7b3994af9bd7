//! Issue record handed over by the issue source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An issue returned by the upstream query.
///
/// The report layer only reads these fields; it never mutates an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number within its repository.
    pub number: u64,

    /// Issue title, reported verbatim.
    pub title: String,

    /// Browser URL of the issue.
    pub html_url: String,

    /// When the issue was opened.
    pub created_at: DateTime<Utc>,

    /// Time of the last comment activity.
    pub last_comment: DateTime<Utc>,
}
