//! Tree-sitter parser cache.
//!
//! Parsers are built lazily, one per grammar, the first time a file of that
//! language is seen, then reused for every later file. Construction can fail
//! (a missing grammar, or a grammar built against an incompatible tree-sitter
//! ABI); the failure is logged once and remembered so the same grammar is not
//! retried on every file.
//!
//! ## Ownership
//!
//! Each `SymbolExtractor` owns its own cache. Tree-sitter parsers carry
//! mutable state, so the cache takes `&mut self` and has no locking. Run
//! concurrent analyses with one cache each.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::types::Language;

/// Source of tree-sitter grammars. Returns `None` when a grammar is missing.
pub type GrammarLoader = fn(Language) -> Option<tree_sitter::Language>;

fn bundled_grammar(language: Language) -> Option<tree_sitter::Language> {
    Some(language.tree_sitter_language())
}

/// A cache entry: a ready parser or a remembered construction failure.
enum ParserSlot {
    Ready(tree_sitter::Parser),
    Unavailable,
}

/// Lazily constructed parsers, one per grammar.
pub struct ParserCache {
    slots: HashMap<Language, ParserSlot>,
    loader: GrammarLoader,
}

impl Default for ParserCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParserCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ready: Vec<_> = self
            .slots
            .iter()
            .filter(|(_, slot)| matches!(slot, ParserSlot::Ready(_)))
            .map(|(lang, _)| lang.as_str())
            .collect();
        ready.sort_unstable();
        f.debug_struct("ParserCache").field("ready", &ready).finish()
    }
}

impl ParserCache {
    /// Create an empty cache backed by the bundled grammars.
    #[must_use]
    pub fn new() -> Self {
        Self::with_loader(bundled_grammar)
    }

    /// Create an empty cache that takes grammars from `loader`.
    #[must_use]
    pub fn with_loader(loader: GrammarLoader) -> Self {
        Self {
            slots: HashMap::new(),
            loader,
        }
    }

    /// Get the parser for `language`, building it on first use.
    ///
    /// Returns `None` if the parser could not be constructed, now or on an
    /// earlier call.
    pub fn get_parser(&mut self, language: Language) -> Option<&mut tree_sitter::Parser> {
        let loader = self.loader;
        let slot = self
            .slots
            .entry(language)
            .or_insert_with(|| build_parser(language, loader));

        match slot {
            ParserSlot::Ready(parser) => Some(parser),
            ParserSlot::Unavailable => None,
        }
    }

    /// Grammar source this cache builds parsers from.
    #[must_use]
    pub fn loader(&self) -> GrammarLoader {
        self.loader
    }

    /// Whether a parser for `language` has been built successfully.
    #[must_use]
    pub fn is_ready(&self, language: Language) -> bool {
        matches!(self.slots.get(&language), Some(ParserSlot::Ready(_)))
    }

    /// Whether construction for `language` was attempted and failed.
    #[must_use]
    pub fn is_unavailable(&self, language: Language) -> bool {
        matches!(self.slots.get(&language), Some(ParserSlot::Unavailable))
    }

    /// Number of grammars seen so far, successful or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no grammar has been requested yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

fn build_parser(language: Language, loader: GrammarLoader) -> ParserSlot {
    let Some(grammar) = loader(language) else {
        warn!(language = %language, "No grammar available, skipping files in this language");
        return ParserSlot::Unavailable;
    };

    let mut parser = tree_sitter::Parser::new();
    match parser.set_language(&grammar) {
        Ok(()) => {
            debug!(language = %language, "Parser constructed");
            ParserSlot::Ready(parser)
        }
        Err(e) => {
            warn!(
                language = %language,
                error = %e,
                "Failed to construct parser, skipping files in this language"
            );
            ParserSlot::Unavailable
        }
    }
}
