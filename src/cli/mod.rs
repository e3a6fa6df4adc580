//! Command-line interface for build-examples
//!
//! Runs the build with the compiled-in configuration and reports each entry on the console.

use anyhow::Result;
use clap::Parser;
use console::style;
use playground_examples::{build_examples_with, BuildConfig, EntryError, EntryOutcome, ExampleEntry};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Bundle the example programs into the playground's generated examples module
#[derive(Parser)]
#[command(name = "build-examples")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(rust_log.as_deref(), cli.verbose))
        .try_init();

    run_with(&BuildConfig::default())
}

/// RUST_LOG wins when set and valid; otherwise --verbose picks DEBUG over WARN.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Build with `config`, print per-entry lines and the summary, and map the report to an exit code.
fn run_with(config: &BuildConfig) -> Result<ExitCode> {
    tracing::debug!(
        "Examples directory: {}, output: {}",
        config.examples_dir.display(),
        config.output_file.display()
    );

    println!("Building examples for Stellogen playground...");
    println!();

    let report = build_examples_with(config, print_outcome)?;

    println!();
    println!("{} Generated: {}", style("✓").green(), report.output.display());
    println!();
    println!("Summary: {} successful, {} errors", report.success_count(), report.error_count());

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_outcome(entry: &ExampleEntry, outcome: &EntryOutcome) {
    match outcome {
        EntryOutcome::Processed(example) => {
            println!("{} Processed: {} -> {}", style("✓").green(), entry.file, example.key);
        }
        EntryOutcome::Skipped(skipped) => match &skipped.error {
            EntryError::NotFound { .. } => {
                eprintln!("{} File not found: {}", style("❌").red(), skipped.file);
            }
            EntryError::Read { source, .. } => {
                eprintln!("{} Error processing {}: {}", style("❌").red(), skipped.file, source);
            }
        },
    }
}
