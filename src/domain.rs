//! Core types shared by the loader, transformer and renderer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An example after prelude inlining, fix-ups and trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedExample {
    pub key: String,
    pub text: String,
}

/// Reading the shared prelude failed. Aborts the run.
#[derive(Debug, Error)]
pub enum PreludeError {
    #[error("failed to read prelude {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A single example could not be loaded. The run continues without it.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What happened to one configured entry.
#[derive(Debug)]
pub enum EntryOutcome {
    Processed(ProcessedExample),
    Skipped(SkippedEntry),
}

/// One skipped entry in the final report.
#[derive(Debug)]
pub struct SkippedEntry {
    pub key: String,
    pub file: String,
    pub error: EntryError,
}

/// Result of a completed run.
#[derive(Debug)]
pub struct BuildReport {
    /// One outcome per configured entry, in configured order.
    pub outcomes: Vec<EntryOutcome>,
    pub output: PathBuf,
}

impl BuildReport {
    pub fn examples(&self) -> impl Iterator<Item = &ProcessedExample> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Processed(example) => Some(example),
            EntryOutcome::Skipped(_) => None,
        })
    }

    pub fn skipped(&self) -> impl Iterator<Item = &SkippedEntry> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            EntryOutcome::Processed(_) => None,
            EntryOutcome::Skipped(skipped) => Some(skipped),
        })
    }

    pub fn success_count(&self) -> usize {
        self.examples().count()
    }

    pub fn error_count(&self) -> usize {
        self.skipped().count()
    }

    pub fn is_success(&self) -> bool {
        self.error_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_error_messages_name_the_path() {
        let missing = EntryError::NotFound { path: PathBuf::from("ex/nat.sg") };
        assert_eq!(missing.to_string(), "File not found: ex/nat.sg");

        let unreadable = EntryError::Read {
            path: PathBuf::from("ex/nat.sg"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert_eq!(unreadable.to_string(), "failed to read ex/nat.sg");
        let cause = std::error::Error::source(&unreadable).expect("source").to_string();
        assert_eq!(cause, "stream did not contain valid UTF-8");
    }

    #[test]
    fn prelude_error_reports_its_cause_once() {
        let err = anyhow::Error::new(PreludeError::Read {
            path: PathBuf::from("milkyway/prelude.sg"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        });
        assert_eq!(err.to_string(), "failed to read prelude milkyway/prelude.sg");

        let chain = format!("{err:?}");
        assert_eq!(chain.matches("No such file or directory").count(), 1);
    }

    #[test]
    fn report_counts_follow_outcomes() {
        let report = BuildReport {
            outcomes: vec![
                EntryOutcome::Skipped(SkippedEntry {
                    key: "b".into(),
                    file: "b.sg".into(),
                    error: EntryError::NotFound { path: PathBuf::from("b.sg") },
                }),
                EntryOutcome::Processed(ProcessedExample { key: "a".into(), text: "x".into() }),
            ],
            output: PathBuf::from("examples.js"),
        };
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.error_count(), 1);
        assert!(!report.is_success());
        assert_eq!(report.examples().map(|e| e.key.as_str()).collect::<Vec<_>>(), ["a"]);
    }
}
