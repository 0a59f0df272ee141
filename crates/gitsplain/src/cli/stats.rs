//! `gitsplain stats` command implementation.

use std::collections::BTreeMap;
use std::path::Path;

use colored::Colorize;
use gitsplain::{Language, SymbolExtractor, analysis};

use super::{RunOptions, display};

/// Run the stats command.
pub fn run(dir: &Path, options: &RunOptions) -> Result<(), gitsplain::Error> {
    let workload = super::load_workload(dir, options)?;
    let files_selected = workload.files.len();

    let mut extractor = SymbolExtractor::with_config(workload.config);
    let files = workload.files.iter().map(|(path, content)| (path, content));
    let summary = analysis::analyze(&mut extractor, files);

    println!("{}", "Gitsplain Static Analysis".cyan().bold());
    println!();

    println!(
        "  {}: {} ({} selected)",
        "Files parsed".white().bold(),
        summary.files_parsed.to_string().green(),
        files_selected
    );
    display::print_count("Classes", summary.total_classes);
    display::print_count("Functions", summary.total_functions);
    println!();

    // BTreeMap keeps the language listing in a stable order
    let mut by_language: BTreeMap<Language, usize> = BTreeMap::new();
    for symbol in &summary.symbols {
        *by_language.entry(symbol.language).or_default() += 1;
    }

    if by_language.is_empty() {
        println!("  {}", "No symbols found".dimmed());
    } else {
        println!("  {}:", "Symbols by language".white().bold());
        for (language, count) in by_language {
            println!("    {}: {}", language.as_str().dimmed(), count);
        }
    }

    display::print_skipped(workload.selection.skipped);
    Ok(())
}
