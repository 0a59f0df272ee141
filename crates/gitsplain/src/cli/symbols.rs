//! `gitsplain symbols` command implementation.

use std::path::Path;

use colored::Colorize;
use gitsplain::SymbolExtractor;

use super::{OutputFormat, RunOptions, display};

/// Run the symbols command.
pub fn run(
    dir: &Path,
    options: &RunOptions,
    format: OutputFormat,
) -> Result<(), gitsplain::Error> {
    let workload = super::load_workload(dir, options)?;
    let exclude_tests = workload.config.exclude_tests;

    let mut extractor = SymbolExtractor::with_config(workload.config);
    let files = workload.files.iter().map(|(path, content)| (path, content));
    let symbols = extractor.extract_from_files(files, exclude_tests);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&symbols)?);
        }
        OutputFormat::Text => {
            if symbols.is_empty() {
                eprintln!("{}", "No symbols found".dimmed());
            } else {
                println!("{}", gitsplain::render_symbols(&symbols));
            }
            display::print_skipped(workload.selection.skipped);
        }
    }

    Ok(())
}
