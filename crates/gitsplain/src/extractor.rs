//! Symbol extraction entry point.
//!
//! `SymbolExtractor` takes file contents that are already in memory, keyed by
//! path, and returns one flat, ordered list of symbols:
//!
//! ```text
//! (path, content) ──► test filter ──► detect language ──► parser cache
//!                                                            │
//!                     Vec<Symbol> ◄── walk tree ◄── parse ◄──┘
//! ```
//!
//! ## Best effort
//!
//! Batch extraction never fails. A file that is a test, has an unknown
//! extension, has no usable parser, or cannot be parsed contributes no
//! symbols and the batch moves on. [`SymbolExtractor::extract_file`] exposes
//! the per-file `Result` for callers that want to know why.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::config::ExtractorConfig;
use crate::error::FileError;
use crate::languages;
use crate::parser::ParserCache;
use crate::test_files;
use crate::types::{Language, Symbol};
use crate::walker;

/// Extracts symbols from source files, reusing one parser per grammar.
///
/// Extraction takes `&mut self` because the parsers are stateful. Use one
/// extractor per concurrent analysis, or [`extract_from_files_parallel`],
/// which gives every worker its own parsers.
///
/// [`extract_from_files_parallel`]: SymbolExtractor::extract_from_files_parallel
#[derive(Debug, Default)]
pub struct SymbolExtractor {
    parsers: ParserCache,
    config: ExtractorConfig,
}

impl SymbolExtractor {
    /// Create an extractor with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with the given settings.
    #[must_use]
    pub fn with_config(config: ExtractorConfig) -> Self {
        Self {
            parsers: ParserCache::new(),
            config,
        }
    }

    /// Create an extractor around an existing parser cache.
    #[must_use]
    pub fn with_parser_cache(parsers: ParserCache, config: ExtractorConfig) -> Self {
        Self { parsers, config }
    }

    /// Settings this extractor was built with.
    #[must_use]
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// The parser cache, for inspecting which grammars have been loaded.
    #[must_use]
    pub fn parsers(&self) -> &ParserCache {
        &self.parsers
    }

    /// Detect the grammar for a path from its extension.
    #[must_use]
    pub fn detect_language(&self, path: &str) -> Option<Language> {
        languages::detect_language(path)
    }

    /// Whether `path` is a test file, including configured extra test dirs.
    #[must_use]
    pub fn is_test_file(&self, path: &str) -> bool {
        test_files::is_test_file_with(path, &self.config.extra_test_dirs)
    }

    /// Extract classes, structs, interfaces and functions from one file.
    ///
    /// `language` overrides extension-based detection. Returns an empty list
    /// when the language is unknown, no parser is available, or parsing fails.
    pub fn extract_symbols(
        &mut self,
        content: &str,
        path: &str,
        language: Option<Language>,
    ) -> Vec<Symbol> {
        self.extract_file(content, path, language).unwrap_or_default()
    }

    /// Extract symbols from one file, reporting why a file yielded nothing.
    pub fn extract_file(
        &mut self,
        content: &str,
        path: &str,
        language: Option<Language>,
    ) -> Result<Vec<Symbol>, FileError> {
        extract_with(&mut self.parsers, content, path, language)
    }

    /// Extract symbols from many files.
    ///
    /// Files are processed in iteration order and their symbols appended in
    /// document order, so the output order is fully determined by the input
    /// order. Identical names in different files are all kept.
    pub fn extract_from_files<I, P, C>(&mut self, files: I, exclude_tests: bool) -> Vec<Symbol>
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: AsRef<str>,
    {
        let mut all_symbols = Vec::new();
        for (path, content) in files {
            let path = path.as_ref();
            if exclude_tests && self.is_test_file(path) {
                debug!(path, "Skipping test file");
                continue;
            }
            if let Ok(symbols) = self.extract_file(content.as_ref(), path, None) {
                all_symbols.extend(symbols);
            }
        }
        all_symbols
    }

    /// Parallel version of [`extract_from_files`] with the same output order.
    ///
    /// Each rayon worker builds its own parsers from this extractor's grammar
    /// source; this extractor's cache is not touched.
    ///
    /// [`extract_from_files`]: SymbolExtractor::extract_from_files
    pub fn extract_from_files_parallel<P, C>(
        &self,
        files: &[(P, C)],
        exclude_tests: bool,
    ) -> Vec<Symbol>
    where
        P: AsRef<str> + Sync,
        C: AsRef<str> + Sync,
    {
        let loader = self.parsers.loader();
        let extra_test_dirs = self.config.extra_test_dirs.as_slice();

        let per_file: Vec<Vec<Symbol>> = files
            .par_iter()
            .map_init(
                || ParserCache::with_loader(loader),
                |parsers, (path, content)| {
                    let path = path.as_ref();
                    if exclude_tests && test_files::is_test_file_with(path, extra_test_dirs) {
                        return Vec::new();
                    }
                    extract_with(parsers, content.as_ref(), path, None).unwrap_or_default()
                },
            )
            .collect();

        per_file.into_iter().flatten().collect()
    }
}

/// Per-file extraction against a given parser cache.
fn extract_with(
    parsers: &mut ParserCache,
    content: &str,
    path: &str,
    language: Option<Language>,
) -> Result<Vec<Symbol>, FileError> {
    let Some(language) = language.or_else(|| languages::detect_language(path)) else {
        debug!(path, "Unsupported file type, skipping");
        return Err(FileError::unsupported_language(path));
    };

    let Some(parser) = parsers.get_parser(language) else {
        debug!(path, language = %language, "No parser for language, skipping");
        return Err(FileError::parser_unavailable(path, language));
    };

    let Some(tree) = parser.parse(content, None) else {
        warn!(path, language = %language, "Failed to parse file, skipping");
        return Err(FileError::parse_failed(path, "parser returned no syntax tree"));
    };

    let grammar = language.grammar();
    let symbols = walker::walk(
        &tree.root_node(),
        content,
        path,
        language,
        grammar.type_kinds,
        grammar.function_kinds,
    );

    debug!(path, language = %language, symbols = symbols.len(), "Extracted symbols");
    Ok(symbols)
}
