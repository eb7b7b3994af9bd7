//! Issue loading error types.

use thiserror::Error;

/// Errors that can occur while loading issue query results.
#[derive(Debug, Error)]
pub enum IssueError {
    /// Failed to read the query file.
    #[error("Failed to read issue query '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Query file is not valid JSON or is missing issue fields.
    #[error("Failed to parse issue query '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
