//! CLI for the bot report writer.
//!
//! Reads the issues an upstream bot matched and writes the console, HTML and
//! JSON reports for them.

use bot_report::{ReportConfig, RunSummary, Runner, RunnerConfig, RunnerError};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Bot Report - Write console, HTML and JSON reports of stale issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the issue query JSON produced by the bot.
    #[arg(long)]
    input: PathBuf,

    /// Directory receiving the generated reports.
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Path to the report config file.
    #[arg(long, env = "BOT_REPORT_CONFIG", default_value = "bot-report.toml")]
    config: PathBuf,

    /// Days after opening before an issue is stale (overrides config).
    #[arg(long)]
    max_age_days: Option<u32>,

    /// Days without a comment before an issue is stale (overrides config).
    #[arg(long)]
    max_silence_days: Option<u32>,

    /// Also report issues that aren't stale.
    #[arg(long)]
    include_active: bool,

    /// Print elapsed times without ANSI color.
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args) {
        Ok(summary) => {
            print_summary(&summary);

            if summary.repositories_processed == 0 {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, keeping stdout
///   for the report itself
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let report = apply_overrides(ReportConfig::load_or_default(&args.config)?, &args);
    report.validate(&args.config)?;

    let config = RunnerConfig::new(args.input, args.output_dir)
        .with_report_config(report)
        .with_color(!args.no_color);
    Runner::new(config).run()
}

/// Applies command line overrides on top of the config file.
fn apply_overrides(mut report: ReportConfig, args: &Args) -> ReportConfig {
    if let Some(days) = args.max_age_days {
        report.max_age_days = days;
    }
    if let Some(days) = args.max_silence_days {
        report.max_silence_days = days;
    }
    if args.include_active {
        report.include_active = true;
    }
    report
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Repositories processed: {}",
        summary.repositories_processed
    );
    println!("  Repositories skipped: {}", summary.repositories_skipped);
    println!("  Issues examined: {}", summary.issues_examined);
    println!("  Stale issues: {}", summary.stale_issues);
    if summary.active_issues > 0 {
        println!("  Active issues: {}", summary.active_issues);
    }
    println!("  HTML report: {}", summary.html_path.display());
    println!("  JSON report: {}", summary.json_path.display());
}
