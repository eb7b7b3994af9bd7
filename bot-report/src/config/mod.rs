//! Report configuration.
//!
//! Settings are read from an optional TOML file:
//! ```text
//! title = "Stale Issues"
//! max-age-days = 30
//! max-silence-days = 7
//! include-active = false
//! elapsed-format = "{days} days {hours}:{minutes}:{seconds}"
//! ```

mod error;
mod report_config;

pub use error::ConfigError;
pub use report_config::ReportConfig;
