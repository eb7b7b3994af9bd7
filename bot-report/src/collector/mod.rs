//! Structured record of the issues reported during a run.
//!
//! Runs alongside the console/HTML stream and is written once, as JSON, at
//! the end of the run.

mod error;
mod records;

pub use error::CollectorError;
pub use records::{OutputIssue, OutputRepository};

use crate::report::report_file_name;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root of the JSON report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputIssuesJson {
    /// Repositories in the order they were added.
    pub repositories: Vec<OutputRepository>,
}

impl OutputIssuesJson {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a repository.
    pub fn push_repository(&mut self, repository: OutputRepository) {
        self.repositories.push(repository);
    }

    /// Returns the repository named `name`, appending an empty one if it
    /// hasn't been seen yet.
    pub fn repository_mut(&mut self, name: &str) -> &mut OutputRepository {
        let index = match self.repositories.iter().position(|r| r.name == name) {
            Some(index) => index,
            None => {
                self.repositories.push(OutputRepository::new(name));
                self.repositories.len() - 1
            }
        };
        &mut self.repositories[index]
    }

    /// Returns true if no issue has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issue_count() == 0
    }

    /// Number of recorded issues across all repositories.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.repositories.iter().map(|r| r.issues.len()).sum()
    }

    /// Default dump name, `botreport_<timestamp>.json` in local time.
    #[must_use]
    pub fn default_file_name() -> String {
        report_file_name(&Local::now(), "json")
    }

    /// Serializes the collector and writes it to `path` in one write.
    ///
    /// # Errors
    ///
    /// Returns [`CollectorError`] if serialization or the write fails.
    pub fn write_output(&self, path: &Path) -> Result<(), CollectorError> {
        let json = serde_json::to_string_pretty(self)?;

        std::fs::write(path, json).map_err(|e| CollectorError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        info!(
            path = %path.display(),
            repositories = self.repositories.len(),
            issues = self.issue_count(),
            "Wrote JSON report"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::Issue;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn issue(number: u64) -> Issue {
        Issue {
            number,
            title: format!("Issue {number}"),
            html_url: format!("https://github.com/acme/repo-a/issues/{number}"),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            last_comment: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn serializes_expected_structure() {
        let mut collector = OutputIssuesJson::new();
        let mut repo = OutputRepository::new("repo-a");
        repo.push("stale", issue(1));
        collector.push_repository(repo);

        let value = serde_json::to_value(&collector).unwrap();
        assert_eq!(
            value,
            json!({
                "repositories": [{
                    "name": "repo-a",
                    "issues": [{
                        "tag": "stale",
                        "issue": {
                            "number": 1,
                            "title": "Issue 1",
                            "html_url": "https://github.com/acme/repo-a/issues/1",
                            "created_at": "2024-01-01T00:00:00Z",
                            "last_comment": "2024-01-02T00:00:00Z"
                        }
                    }]
                }]
            })
        );
    }

    #[test]
    fn empty_collector_serializes_empty_list() {
        let value = serde_json::to_value(OutputIssuesJson::new()).unwrap();
        assert_eq!(value, json!({ "repositories": [] }));
    }

    #[test]
    fn repository_mut_reuses_existing() {
        let mut collector = OutputIssuesJson::new();
        collector.repository_mut("repo-a").push("stale", issue(1));
        collector.repository_mut("repo-b").push("active", issue(2));
        collector.repository_mut("repo-a").push("stale", issue(3));

        let names: Vec<&str> = collector
            .repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["repo-a", "repo-b"]);
        assert_eq!(collector.repositories[0].issues.len(), 2);
        assert_eq!(collector.repositories[0].issues[1].issue.number, 3);
        assert_eq!(collector.issue_count(), 3);
    }

    #[test]
    fn write_output_round_trips() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("report.json");

        let mut collector = OutputIssuesJson::new();
        collector.repository_mut("repo-a").push("stale", issue(1));
        collector.write_output(&path).unwrap();

        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let repo = &parsed["repositories"][0];
        assert_eq!(repo["name"], "repo-a");
        assert_eq!(repo["issues"][0]["tag"], "stale");
        assert_eq!(repo["issues"][0]["issue"]["number"], 1);
        assert_eq!(
            repo["issues"][0]["issue"]["html_url"],
            "https://github.com/acme/repo-a/issues/1"
        );

        let typed: OutputIssuesJson = serde_json::from_value(parsed).unwrap();
        assert_eq!(typed, collector);
    }

    #[test]
    fn write_output_missing_directory() {
        let temp = TempDir::new().unwrap();
        let result = OutputIssuesJson::new().write_output(&temp.path().join("missing/out.json"));

        assert!(matches!(result, Err(CollectorError::IoError { .. })));
    }

    #[test]
    fn default_file_name_is_timestamped() {
        let name = OutputIssuesJson::default_file_name();

        assert!(name.starts_with("botreport_"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "botreport_YYYYMMDD_HHMMSS.json".len());
    }
}
