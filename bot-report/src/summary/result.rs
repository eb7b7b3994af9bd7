//! Processing result types.

/// Result of processing a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// Issues from the repository were reported.
    Reported {
        /// Repository name.
        repository: String,
        /// Number of stale issues reported.
        stale: usize,
        /// Number of active issues reported.
        active: usize,
    },

    /// Repository had nothing to report.
    Skipped {
        /// Repository name.
        repository: String,
        /// Reason for skipping.
        reason: String,
    },
}
