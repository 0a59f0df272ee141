//! Error types for gitsplain operations.
//!
//! Errors are split the same way the extraction pipeline is:
//!
//! - **`Error`**: infrastructure failures (reading a workspace, loading a
//!   config file) that stop the operation that hit them
//! - **`FileError`**: per-file failures during symbol extraction, which are
//!   logged and skipped so the rest of the batch still produces symbols
//!
//! `extract_from_files` never returns an `Error`. A single malformed file only
//! costs the symbols of that file.

use thiserror::Error;

use crate::types::Language;

/// Result type for gitsplain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for gitsplain operations.
#[derive(Debug, Error)]
pub enum Error {
    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),

    /// Output serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error encountered while extracting symbols from a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileError {
    /// Path of the file, as supplied by the caller
    pub path: String,
    /// Category of the error
    pub kind: FileErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.path, self.message, self.kind)
    }
}

impl std::error::Error for FileError {}

/// Categorization of per-file extraction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileErrorKind {
    /// File extension maps to no registered grammar
    UnsupportedLanguage,

    /// The grammar is registered but its parser could not be constructed
    ParserUnavailable,

    /// Tree-sitter produced no syntax tree for the content
    ParseFailed,
}

impl std::fmt::Display for FileErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLanguage => write!(f, "unsupported language"),
            Self::ParserUnavailable => write!(f, "parser unavailable"),
            Self::ParseFailed => write!(f, "parse failed"),
        }
    }
}

impl FileError {
    /// Create a new per-file error.
    #[must_use]
    pub fn new(path: impl Into<String>, kind: FileErrorKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    /// Create an unsupported language error.
    #[must_use]
    pub fn unsupported_language(path: &str) -> Self {
        let ext = std::path::Path::new(path)
            .extension()
            .map_or_else(|| "none".to_string(), |e| e.to_string_lossy().to_string());
        Self::new(
            path,
            FileErrorKind::UnsupportedLanguage,
            format!("unsupported extension: {ext}"),
        )
    }

    /// Create an error for a grammar whose parser could not be built.
    #[must_use]
    pub fn parser_unavailable(path: &str, language: Language) -> Self {
        Self::new(
            path,
            FileErrorKind::ParserUnavailable,
            format!("no parser available for {}", language.as_str()),
        )
    }

    /// Create a parse error for a file.
    #[must_use]
    pub fn parse_failed(path: &str, message: impl Into<String>) -> Self {
        Self::new(path, FileErrorKind::ParseFailed, message)
    }
}
