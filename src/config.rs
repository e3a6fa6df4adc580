//! Build configuration: the example mapping, prelude location and marker spellings.
//!
//! The mapping is compiled in. [`BuildConfig::default`] resolves every path relative to
//! the crate's own directory; tests and embedders can build a config pointing anywhere.

use std::path::{Path, PathBuf};

/// Sub-path of the shared macro prelude inside the examples directory.
pub const PRELUDE_SUBPATH: &str = "milkyway/prelude.sg";

/// Comment line placed in front of the inlined prelude.
pub const PRELUDE_BANNER: &str = "' Prelude macros (normally imported)";

/// Accepted spellings of the "import the prelude" directive.
pub const MARKER_DIRECTIVES: &[&str] =
    &[r#"(use-macros "milkyway/prelude.sg")"#, r#"(use-macros "./milkyway/prelude.sg")"#];

/// File name of the generated module, relative to the tool directory.
pub const OUTPUT_FILE_NAME: &str = "examples.js";

/// A compatibility rewrite applied to one example after prelude inlining.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixup {
    /// Replace the first occurrence of `from` with `to`.
    Replace { from: &'static str, to: &'static str },
    /// Put a line of text in front of the example.
    Prepend(&'static str),
}

/// One configured example: output key, source file and its fix-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleEntry {
    pub key: &'static str,
    pub file: &'static str,
    pub fixups: &'static [Fixup],
}

impl ExampleEntry {
    pub const fn new(key: &'static str, file: &'static str) -> Self {
        Self { key, file, fixups: &[] }
    }

    pub const fn with_fixups(self, fixups: &'static [Fixup]) -> Self {
        Self { fixups, ..self }
    }
}

// The playground interpreter has no `exec` display for these graph examples.
const INTERACT_FIXUP: &[Fixup] =
    &[Fixup::Replace { from: "<show exec (process", to: "<show interact (process" }];

const HELLO_FIXUP: &[Fixup] = &[Fixup::Prepend("' Hello World")];

/// Examples shipped with the playground, in output order.
pub const EXAMPLE_MAPPING: &[ExampleEntry] = &[
    ExampleEntry::new("hello", "hello.sg").with_fixups(HELLO_FIXUP),
    ExampleEntry::new("prolog", "prolog.sg").with_fixups(INTERACT_FIXUP),
    ExampleEntry::new("macros", "macro_demo.sg"),
    ExampleEntry::new("nat", "nat.sg"),
    ExampleEntry::new("automata", "automata.sg"),
    ExampleEntry::new("stackmachine", "npda.sg"),
    ExampleEntry::new("turing", "turing.sg"),
    ExampleEntry::new("stack", "stack.sg").with_fixups(INTERACT_FIXUP),
];

/// Resolved locations and the entry table for one run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub examples_dir: PathBuf,
    pub output_file: PathBuf,
    pub entries: Vec<ExampleEntry>,
}

impl BuildConfig {
    /// Config rooted at `tool_dir`, with examples expected in its sibling `examples/`.
    pub fn for_tool_dir(tool_dir: &Path) -> Self {
        Self {
            examples_dir: tool_dir.join("..").join("examples"),
            output_file: tool_dir.join(OUTPUT_FILE_NAME),
            entries: EXAMPLE_MAPPING.to_vec(),
        }
    }

    pub fn prelude_path(&self) -> PathBuf {
        self.examples_dir.join(PRELUDE_SUBPATH)
    }

    pub fn example_path(&self, entry: &ExampleEntry) -> PathBuf {
        self.examples_dir.join(entry.file)
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::for_tool_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
    }
}
