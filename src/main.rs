//! build-examples: regenerate the playground's `examples.js`

use anyhow::Result;
use std::process::ExitCode;

mod cli;

fn main() -> Result<ExitCode> {
    cli::run()
}
