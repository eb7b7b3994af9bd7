//! Runner configuration.

use crate::config::ReportConfig;
use std::path::{Path, PathBuf};

/// Configuration for one reporting run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the issue query JSON produced by the upstream bot.
    input_path: PathBuf,
    /// Directory receiving the HTML and JSON reports.
    output_dir: PathBuf,
    /// Report settings.
    report: ReportConfig,
    /// Whether console output is colored.
    color: bool,
}

impl RunnerConfig {
    /// Creates a new configuration with default report settings.
    pub fn new(input_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            input_path,
            output_dir,
            report: ReportConfig::default(),
            color: true,
        }
    }

    /// Sets the report settings.
    pub fn with_report_config(mut self, report: ReportConfig) -> Self {
        self.report = report;
        self
    }

    /// Enables or disables console color.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Returns the issue query path.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Returns the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Returns the report settings.
    pub fn report(&self) -> &ReportConfig {
        &self.report
    }

    /// Returns whether console output is colored.
    pub fn color(&self) -> bool {
        self.color
    }
}
