//! playground-examples: bundle example programs for the web playground
//!
//! Reads a fixed set of example sources, inlines the shared macro prelude where an
//! example imports it, and writes one generated JavaScript module that maps short
//! keys to self-contained program text.

pub mod config;
pub mod domain;
pub mod load;
pub mod pipeline;
pub mod render;
pub mod transform;

pub use config::{BuildConfig, ExampleEntry, Fixup, EXAMPLE_MAPPING};
pub use domain::{BuildReport, EntryError, EntryOutcome, PreludeError, ProcessedExample};
pub use pipeline::{build_examples, build_examples_with};
