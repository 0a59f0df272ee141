//! # Gitsplain: Source Symbol Extraction
//!
//! Gitsplain turns a repository's source files into a compact list of the
//! classes, structs, interfaces and top-level functions they define. The
//! list feeds architecture-diagram prompts, so it favours a small, stable,
//! deterministic summary over completeness.
//!
//! ## Design Philosophy
//!
//! - **Best effort** - A file that cannot be handled is skipped, never fatal
//! - **Shallow on purpose** - Only declarations near the top of a file count
//! - **Tests are noise** - Test files are filtered out before parsing
//! - **Table driven** - Each language is a row of data, not a code path
//!
//! ## Quick Start
//!
//! ```no_run
//! use gitsplain::SymbolExtractor;
//!
//! let mut extractor = SymbolExtractor::new();
//!
//! let files = [
//!     ("src/app.py", "class App:\n    \"\"\"Entry point.\"\"\"\n"),
//!     ("tests/test_app.py", "class TestApp:\n    pass\n"),
//! ];
//!
//! for symbol in extractor.extract_from_files(files, true) {
//!     // class App @ src/app.py:1 - Entry point.
//!     println!("{symbol}");
//! }
//! ```
//!
//! Whole checkouts can be read with [`workspace::read_source_files`] and
//! summarized with [`analysis::analyze`].

pub mod analysis;
pub mod config;
mod error;
mod extractor;
pub mod languages;
pub mod parser;
mod test_files;
mod types;
pub mod walker;
pub mod workspace;

pub use analysis::{Selection, StaticAnalysis, render_symbols, select_parseable_files};
pub use config::ExtractorConfig;
pub use error::{Error, FileError, FileErrorKind, Result};
pub use extractor::SymbolExtractor;
pub use languages::{detect_language, function_node_kinds, supported_extensions, type_node_kinds};
pub use test_files::{TEST_DIR_NAMES, TEST_FILE_PATTERNS, is_test_file, is_test_file_with};
pub use types::{
    DOCSTRING_MAX_CHARS, Language, Symbol, SymbolKind, TRUNCATION_MARKER, truncate_docstring,
};
