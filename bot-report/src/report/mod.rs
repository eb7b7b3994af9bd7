//! Console and HTML report writing.
//!
//! A [`ReportSink`] is opened at the start of a reporting run and keeps the
//! console and the HTML file in lock-step: every operator-facing line has a
//! matching HTML fragment.

mod error;
mod file_name;
mod sink;

pub use error::ReportError;
pub use file_name::{report_file_name, ReportPaths, REPORT_PREFIX, TIMESTAMP_FORMAT};
pub use sink::ReportSink;
