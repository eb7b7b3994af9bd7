//! Runner error types.

/// Errors that can occur during a reporting run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Report config loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Elapsed-time pattern errors.
    #[error(transparent)]
    Elapsed(#[from] crate::elapsed::ElapsedError),

    /// Issue query loading errors.
    #[error(transparent)]
    Issues(#[from] crate::issues::IssueError),

    /// HTML report and console errors.
    #[error(transparent)]
    Report(#[from] crate::report::ReportError),

    /// JSON report errors.
    #[error(transparent)]
    Collector(#[from] crate::collector::CollectorError),

    /// Output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
