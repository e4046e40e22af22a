//! Workout Summary - Entry Point
//!
//! Reads sensor packages (the built-in demonstration list or a JSON file),
//! computes a summary for each and prints it to stdout.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{Level, debug, error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use workout_summary::config::PackageSet;
use workout_summary::{Calculator, SensorPackage, Summary};

/// Output format for summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// The tracker message line.
    Text,
    /// One JSON object per line.
    Json,
}

/// Fitness tracker summaries from raw sensor packages.
#[derive(Parser, Debug)]
#[command(name = "workout-summary")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with sensor packages; the demonstration packages are used when omitted.
    #[arg(short, long)]
    packages: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Log level: trace, debug, info, warn, error.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    /// Parses the log level string into a tracing Level.
    fn parse_log_level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            other => anyhow::bail!("invalid log level: {}", other),
        }
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing(level: Level) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("workout_summary={level}")));

    // Logs go to stderr so stdout carries only summaries
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

/// Renders a summary in the requested format.
fn render(summary: &Summary, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(summary.message()),
        Format::Json => serde_json::to_string(summary).context("failed to serialize summary"),
    }
}

/// Summarizes one package and writes it to `out`.
fn process(package: &SensorPackage, format: Format, out: &mut impl Write) -> Result<()> {
    let workout = package.read()?;
    let summary = workout.summarize()?;
    debug!(code = %package.code, ?summary, "summarized package");
    writeln!(out, "{}", render(&summary, format)?).context("failed to write summary")?;
    Ok(())
}

/// Summarizes every package, skipping failures. Returns false if any package failed.
fn run(args: &Args, out: &mut impl Write) -> Result<bool> {
    let set = PackageSet::load_or_demo(args.packages.as_deref())?;
    info!(count = set.packages.len(), "processing sensor packages");

    let mut all_ok = true;
    for (index, package) in set.packages.iter().enumerate() {
        if let Err(e) = process(package, args.format, out) {
            error!(index, code = %package.code, error = %e, "failed to summarize package");
            all_ok = false;
        }
    }
    Ok(all_ok)
}

/// Main entry point.
fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_level = args.parse_log_level()?;
    init_tracing(log_level)?;

    let stdout = io::stdout();
    if run(&args, &mut stdout.lock())? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
