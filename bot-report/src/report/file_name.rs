//! Timestamped report file names.

use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// Prefix shared by every generated report file.
pub const REPORT_PREFIX: &str = "botreport";

/// Timestamp format embedded in report file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Builds `botreport_<YYYYMMDD_HHMMSS>.<extension>`.
#[must_use]
pub fn report_file_name<Tz>(at: &DateTime<Tz>, extension: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{REPORT_PREFIX}_{}.{extension}",
        at.format(TIMESTAMP_FORMAT)
    )
}

/// Output files of one reporting run, named from the same timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    /// HTML report path.
    pub html: PathBuf,
    /// JSON dump path.
    pub json: PathBuf,
}

impl ReportPaths {
    /// Creates the paths for a run started at `at`.
    #[must_use]
    pub fn new<Tz>(dir: &Path, at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            html: dir.join(report_file_name(at, "html")),
            json: dir.join(report_file_name(at, "json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_report_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap();
        assert_eq!(report_file_name(&at, "html"), "botreport_20240309_070501.html");
    }

    #[test]
    fn test_report_paths_share_timestamp() {
        let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let paths = ReportPaths::new(Path::new("out"), &at);

        assert_eq!(paths.html, Path::new("out/botreport_20231231_235959.html"));
        assert_eq!(paths.json, Path::new("out/botreport_20231231_235959.json"));
    }
}
