//! Orchestrates a reporting run.
//!
//! Loads the issue query, writes the console/HTML report through a
//! [`ReportSink`] and dumps the recorded issues as JSON next to it.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::collector::OutputIssuesJson;
use crate::issues::{IssueQuery, RepositoryIssues};
use crate::report::{ReportPaths, ReportSink};
use crate::stale::{StaleCriteria, ACTIVE_TAG};
use crate::summary::{ProcessingResult, RunSummary};
use chrono::{DateTime, Local, Utc};
use std::io::Write;
use tracing::{debug, info, info_span, warn};

/// Runs a full report over one issue query.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// Executes the run at the current time.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the query can't be loaded or a report can't
    /// be written.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        self.run_at(Utc::now())
    }

    /// Executes the run as if it were `now`. File names use `now` in local
    /// time; elapsed times and staleness use it in UTC.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the query can't be loaded or a report can't
    /// be written.
    pub fn run_at(&self, now: DateTime<Utc>) -> Result<RunSummary, RunnerError> {
        info!(path = %self.config.input_path().display(), "Loading issue query");
        let query = IssueQuery::load(self.config.input_path())?;

        if query.repositories.is_empty() {
            warn!("Issue query contains no repositories");
        }

        let output_dir = self.config.output_dir();
        std::fs::create_dir_all(output_dir).map_err(|e| RunnerError::OutputDir {
            path: output_dir.display().to_string(),
            source: e,
        })?;

        let paths = ReportPaths::new(output_dir, &now.with_timezone(&Local));
        let mut summary = RunSummary::new(paths.html.clone(), paths.json.clone());
        summary.issues_examined = query.issue_count();

        let report = self.config.report();
        let criteria = report.criteria();
        let elapsed_format = report.elapsed_format()?;
        let mut collector = OutputIssuesJson::new();

        let mut sink = ReportSink::create(&paths.html)?
            .with_title(report.title.clone())
            .with_elapsed_format(elapsed_format)
            .with_color(self.config.color());
        sink.setup_html()?;

        for repository in &query.repositories {
            let result = process_repository(
                &mut sink,
                &mut collector,
                repository,
                &criteria,
                report.include_active,
                now,
            )?;
            summary.record_result(&result);
        }

        sink.finish()?;
        collector.write_output(&paths.json)?;

        info!(
            repositories = summary.repositories_processed,
            stale = summary.stale_issues,
            active = summary.active_issues,
            "Report complete"
        );
        Ok(summary)
    }
}

fn process_repository<H: Write, C: Write>(
    sink: &mut ReportSink<H, C>,
    collector: &mut OutputIssuesJson,
    repository: &RepositoryIssues,
    criteria: &StaleCriteria,
    include_active: bool,
    now: DateTime<Utc>,
) -> Result<ProcessingResult, RunnerError> {
    let _span = info_span!("repository", name = %repository.name).entered();

    let classified: Vec<_> = repository
        .issues
        .iter()
        .map(|issue| (issue, criteria.classify(issue, now)))
        .filter(|(_, reason)| reason.is_some() || include_active)
        .collect();

    if classified.is_empty() {
        let reason = if repository.issues.is_empty() {
            "no matching issues"
        } else {
            "no stale issues"
        };
        debug!(reason, "Skipping repository");
        return Ok(ProcessingResult::Skipped {
            repository: repository.name.clone(),
            reason: reason.to_string(),
        });
    }

    sink.print_status(&repository.name, "tab1")?;

    let mut stale = 0;
    let mut active = 0;
    for (issue, reason) in classified {
        match reason {
            Some(reason) => {
                sink.print_stale_issue(issue, now)?;
                collector
                    .repository_mut(&repository.name)
                    .push(reason.as_str(), issue.clone());
                stale += 1;
            }
            None => {
                sink.print_issue(issue)?;
                collector
                    .repository_mut(&repository.name)
                    .push(ACTIVE_TAG, issue.clone());
                active += 1;
            }
        }
    }

    sink.print_break()?;

    info!(stale, active, "Reported repository");
    Ok(ProcessingResult::Reported {
        repository: repository.name.clone(),
        stale,
        active,
    })
}
