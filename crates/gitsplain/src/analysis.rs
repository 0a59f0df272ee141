//! Repository-level static analysis summary.
//!
//! Picks which files of a repository tree are worth parsing, runs extraction
//! over them, and condenses the result into counts plus the symbol list that
//! downstream prompt construction consumes.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{info, warn};

use crate::extractor::SymbolExtractor;
use crate::languages;
use crate::types::{Symbol, SymbolKind};

/// Files chosen for parsing out of a repository tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Parseable paths, in tree order, at most `max_files` of them
    pub files: Vec<String>,
    /// Parseable paths dropped by the cap
    pub skipped: usize,
}

/// Keep the paths with a registered extension, in tree order, capped at
/// `max_files`.
pub fn select_parseable_files<I, P>(file_tree: I, max_files: usize) -> Selection
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let parseable: Vec<String> = file_tree
        .into_iter()
        .filter(|path| languages::detect_language(path.as_ref()).is_some())
        .map(|path| path.as_ref().to_string())
        .collect();
    info!(count = parseable.len(), "Found parseable files");

    let skipped = parseable.len().saturating_sub(max_files);
    if skipped > 0 {
        warn!(max_files, skipped, "Limiting parsed files");
    }

    let mut files = parseable;
    files.truncate(max_files);
    Selection { files, skipped }
}

/// Counts and symbols for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StaticAnalysis {
    /// Distinct files that produced at least one symbol
    pub files_parsed: usize,
    /// Classes, structs and interfaces
    pub total_classes: usize,
    /// Functions
    pub total_functions: usize,
    /// Every extracted symbol, in extraction order
    pub symbols: Vec<Symbol>,
}

impl StaticAnalysis {
    /// Summarize an extracted symbol list.
    #[must_use]
    pub fn from_symbols(symbols: Vec<Symbol>) -> Self {
        let total_functions = symbols
            .iter()
            .filter(|s| s.kind == SymbolKind::Function)
            .count();
        let files_parsed = symbols
            .iter()
            .map(|s| s.filepath.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            files_parsed,
            total_classes: symbols.len() - total_functions,
            total_functions,
            symbols,
        }
    }

    /// The symbol list in prompt format, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        render_symbols(&self.symbols)
    }
}

/// Extract symbols from `files` using the extractor's own settings and
/// summarize them.
pub fn analyze<I, P, C>(extractor: &mut SymbolExtractor, files: I) -> StaticAnalysis
where
    I: IntoIterator<Item = (P, C)>,
    P: AsRef<str>,
    C: AsRef<str>,
{
    let exclude_tests = extractor.config().exclude_tests;
    let symbols = extractor.extract_from_files(files, exclude_tests);
    StaticAnalysis::from_symbols(symbols)
}

/// Join symbols into newline-separated prompt lines.
#[must_use]
pub fn render_symbols(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
