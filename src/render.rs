//! Rendering and writing the generated `examples.js` module.

use crate::domain::ProcessedExample;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

const HEADER: &str = "// Auto-generated file - DO NOT EDIT
// Generated from examples/*.sg files
// Run 'cargo run --bin build-examples' to regenerate
";

const FOOTER: &str = "// Export for use in playground
if (typeof module !== 'undefined' && module.exports) {
  module.exports = examples;
}
";

/// Render the full module text. Keys keep the order of `examples`.
pub fn render_examples_module<'a, I>(examples: I) -> Result<String>
where
    I: IntoIterator<Item = &'a ProcessedExample>,
{
    let mut mapping = Map::new();
    for example in examples {
        mapping.insert(example.key.clone(), Value::String(example.text.clone()));
    }
    let json = serde_json::to_string_pretty(&Value::Object(mapping))
        .context("Failed to serialize examples")?;

    Ok(format!("{HEADER}\nconst examples = {json};\n\n{FOOTER}"))
}

/// Render `examples` and overwrite `output` with the result.
pub fn write_examples_module<'a, I>(output: &Path, examples: I) -> Result<()>
where
    I: IntoIterator<Item = &'a ProcessedExample>,
{
    let document = render_examples_module(examples)?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {}", parent.display()))?;
    }
    fs::write(output, document)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::debug!("Wrote {}", output.display());
    Ok(())
}
