//! Issues consumed from the upstream issue source.
//!
//! The bot that queries the repository host writes its matches to a JSON
//! file grouped by repository; this module reads that hand-off.

mod error;
mod issue;
mod query;

pub use error::IssueError;
pub use issue::Issue;
pub use query::{IssueQuery, RepositoryIssues};
