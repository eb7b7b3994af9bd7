//! Report writing error types.

use thiserror::Error;

/// Errors that can occur while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create the HTML report file.
    #[error("Failed to create report file '{path}': {source}")]
    CreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the HTML report.
    #[error("Failed to write to '{target}': {source}")]
    WriteError {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the console.
    #[error("Failed to write console output: {0}")]
    ConsoleError(#[source] std::io::Error),

    /// Fragment rendering failed.
    #[error(transparent)]
    Template(#[from] crate::templates::TemplateError),

    /// A fragment was written before the document preamble.
    #[error("HTML preamble must be written before any fragment in '{target}'")]
    PreambleMissing { target: String },

    /// `setup_html` was called twice.
    #[error("HTML preamble was already written to '{target}'")]
    PreambleAlreadyWritten { target: String },
}
