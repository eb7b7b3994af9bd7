//! Collector error types.

use thiserror::Error;

/// Errors that can occur while writing the JSON dump.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Failed to write the output file.
    #[error("Failed to write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the collected issues.
    #[error("Failed to serialize collected issues: {0}")]
    SerializeError(#[from] serde_json::Error),
}
