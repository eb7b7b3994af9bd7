#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod collector;
pub mod config;
pub mod elapsed;
pub mod issues;
pub mod report;
pub mod runner;
pub mod stale;
pub mod summary;
pub mod templates;

pub use collector::{CollectorError, OutputIssue, OutputIssuesJson, OutputRepository};
pub use config::{ConfigError, ReportConfig};
pub use elapsed::{elapsed_since, ElapsedError, ElapsedFormat, DEFAULT_PATTERN};
pub use issues::{Issue, IssueError, IssueQuery, RepositoryIssues};
pub use report::{report_file_name, ReportError, ReportPaths, ReportSink};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use stale::{StaleCriteria, StaleReason, ACTIVE_TAG};
pub use summary::{ProcessingResult, RunSummary};
pub use templates::{create_handlebars_registry, HtmlRenderer, TemplateError};
