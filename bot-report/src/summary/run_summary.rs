//! Run summary types.

use super::result::ProcessingResult;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories in the query.
    pub repositories_processed: usize,

    /// Number of repositories with nothing to report.
    pub repositories_skipped: usize,

    /// Number of issues examined.
    pub issues_examined: usize,

    /// Number of stale issues reported.
    pub stale_issues: usize,

    /// Number of active issues reported.
    pub active_issues: usize,

    /// HTML report path.
    pub html_path: PathBuf,

    /// JSON report path.
    pub json_path: PathBuf,
}

impl RunSummary {
    /// Creates a new empty summary for the given output files.
    #[must_use]
    pub fn new(html_path: PathBuf, json_path: PathBuf) -> Self {
        Self {
            html_path,
            json_path,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        self.repositories_processed += 1;
        match result {
            ProcessingResult::Reported { stale, active, .. } => {
                self.stale_issues += stale;
                self.active_issues += active;
            }
            ProcessingResult::Skipped { .. } => self.repositories_skipped += 1,
        }
    }

    /// Total number of issues written to the report.
    #[must_use]
    pub fn issues_reported(&self) -> usize {
        self.stale_issues + self.active_issues
    }

    /// Returns true if the report lists at least one issue.
    #[must_use]
    pub fn has_reported(&self) -> bool {
        self.issues_reported() > 0
    }
}
