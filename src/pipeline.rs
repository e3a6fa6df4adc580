//! The build run: prelude, every configured entry in order, then the output module.

use crate::config::{BuildConfig, ExampleEntry};
use crate::domain::{BuildReport, EntryOutcome, ProcessedExample, SkippedEntry};
use crate::load::{load_example, load_prelude};
use crate::render::write_examples_module;
use crate::transform::process_example;
use anyhow::Result;

/// Run the build without per-entry callbacks.
pub fn build_examples(config: &BuildConfig) -> Result<BuildReport> {
    build_examples_with(config, |_, _| {})
}

/// Run the build, calling `on_outcome` as each entry finishes.
///
/// Fails before writing anything if the prelude cannot be read. Entry failures are
/// recorded in the report and never stop the run; the output is written with every
/// entry that succeeded.
pub fn build_examples_with<F>(config: &BuildConfig, mut on_outcome: F) -> Result<BuildReport>
where
    F: FnMut(&ExampleEntry, &EntryOutcome),
{
    let prelude = load_prelude(&config.prelude_path())?;

    let mut outcomes = Vec::with_capacity(config.entries.len());
    for entry in &config.entries {
        let outcome = process_entry(config, entry, &prelude);
        on_outcome(entry, &outcome);
        outcomes.push(outcome);
    }

    let report = BuildReport { outcomes, output: config.output_file.clone() };
    write_examples_module(&report.output, report.examples())?;
    Ok(report)
}

fn process_entry(config: &BuildConfig, entry: &ExampleEntry, prelude: &str) -> EntryOutcome {
    let path = config.example_path(entry);
    match load_example(&path) {
        Ok(content) => EntryOutcome::Processed(ProcessedExample {
            key: entry.key.to_string(),
            text: process_example(entry, content, prelude),
        }),
        Err(error) => {
            tracing::debug!("Skipping example '{}': {}", entry.key, error);
            EntryOutcome::Skipped(SkippedEntry {
                key: entry.key.to_string(),
                file: entry.file.to_string(),
                error,
            })
        }
    }
}
