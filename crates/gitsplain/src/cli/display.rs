//! Common display utilities for CLI commands.

use colored::Colorize;

/// Print a bold label with a green count.
pub fn print_count(label: &str, count: usize) {
    println!("  {}: {}", label.white().bold(), count.to_string().green());
}

/// Note on stderr how many parseable files the file cap left out.
pub fn print_skipped(skipped: usize) {
    if skipped > 0 {
        eprintln!(
            "{}: {} files (over --max-files limit)",
            "Skipped".yellow(),
            skipped
        );
    }
}
