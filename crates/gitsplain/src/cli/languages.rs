//! `gitsplain languages` command implementation.

use colored::Colorize;
use gitsplain::languages::GRAMMARS;

/// Run the languages command.
pub fn run() {
    println!("{}", "Supported languages".cyan().bold());
    println!();

    let width = GRAMMARS
        .iter()
        .map(|g| g.language.as_str().len())
        .max()
        .unwrap_or(0);

    for grammar in &GRAMMARS {
        let extensions: Vec<String> = grammar.extensions.iter().map(|e| format!(".{e}")).collect();
        println!(
            "  {}  {}",
            format!("{:<width$}", grammar.language.as_str()).white().bold(),
            extensions.join(" ").dimmed()
        );
    }
}
