//! Domain types for symbol extraction.
//!
//! - **`Language`**: the grammar a file was parsed with
//! - **`SymbolKind`**: the closed, language-neutral kind vocabulary
//! - **`Symbol`**: one extracted type or function definition
//!
//! ## Design Decisions
//!
//! | Decision | Choice | Rationale |
//! |----------|--------|-----------|
//! | Language | Enum not String | Unknown grammar ids are unrepresentable past the registry |
//! | SymbolKind | Four variants | Dozens of grammar node kinds collapse into it |
//! | filepath | String | Caller-supplied label, never touched as a filesystem path |

use serde::{Deserialize, Serialize};

use crate::languages::{self, GrammarDescriptor};

/// Maximum docstring length (in characters) before truncation.
pub const DOCSTRING_MAX_CHARS: usize = 200;

/// Appended to docstrings cut at `DOCSTRING_MAX_CHARS`.
pub const TRUNCATION_MARKER: &str = "...";

/// Grammars known to the registry.
///
/// The serialized form is the grammar identifier (`c_sharp`, `tsx`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python (`.py`, `.pyi`)
    Python,
    /// JavaScript, including JSX (`.js`, `.jsx`)
    JavaScript,
    /// TypeScript (`.ts`)
    TypeScript,
    /// TypeScript with JSX (`.tsx`)
    Tsx,
    /// Go (`.go`)
    Go,
    /// Rust (`.rs`)
    Rust,
    /// Java (`.java`)
    Java,
    /// Kotlin (`.kt`)
    Kotlin,
    /// C (`.c`, `.h`)
    C,
    /// C++ (`.cpp`, `.hpp`, `.cc`)
    Cpp,
    /// C# (`.cs`)
    #[serde(rename = "c_sharp")]
    CSharp,
    /// Ruby (`.rb`)
    Ruby,
    /// PHP (`.php`)
    Php,
    /// Swift (`.swift`)
    Swift,
    /// Scala (`.scala`)
    Scala,
}

impl Language {
    /// Every registered language, in registry order.
    pub const ALL: [Language; 15] = [
        Self::Python,
        Self::JavaScript,
        Self::TypeScript,
        Self::Tsx,
        Self::Go,
        Self::Rust,
        Self::Java,
        Self::Kotlin,
        Self::C,
        Self::Cpp,
        Self::CSharp,
        Self::Ruby,
        Self::Php,
        Self::Swift,
        Self::Scala,
    ];

    /// Grammar identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Java => "java",
            Self::Kotlin => "kotlin",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "c_sharp",
            Self::Ruby => "ruby",
            Self::Php => "php",
            Self::Swift => "swift",
            Self::Scala => "scala",
        }
    }

    /// Look up a language by grammar identifier.
    #[must_use]
    pub fn from_grammar_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.as_str() == id)
    }

    /// Detect language from a file extension, with or without the leading dot.
    ///
    /// # Returns
    ///
    /// `None` if the extension is not recognized.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.trim_start_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.extensions().contains(&ext.as_str()))
    }

    /// File extensions handled by this language, without the leading dot.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        self.grammar().extensions
    }

    /// Registry entry for this language.
    #[must_use]
    pub fn grammar(&self) -> &'static GrammarDescriptor {
        languages::descriptor(*self)
    }

    /// Tree-sitter grammar bundled for this language.
    #[must_use]
    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        languages::tree_sitter_language(*self)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized symbol kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// Class, object or singleton declaration
    Class,
    /// Struct, or a Go type declaration
    Struct,
    /// Interface, trait, protocol or TypeScript type alias
    Interface,
    /// Function, method or constructor
    Function,
}

impl SymbolKind {
    /// Lowercase name used in the prompt rendering.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Function => "function",
        }
    }

    /// Whether this kind names a type rather than a callable.
    #[must_use]
    pub fn is_type(&self) -> bool {
        !matches!(self, Self::Function)
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type or function definition extracted from a source file.
///
/// Renders as `<kind> <name> @ <filepath>:<line>`, followed by
/// ` - <docstring>` when one was found. Prompt construction depends on that
/// exact shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    /// Identifier text (never empty)
    pub name: String,
    /// Normalized kind
    pub kind: SymbolKind,
    /// Line of the defining node (1-indexed)
    pub line: u32,
    /// Path label supplied by the caller
    pub filepath: String,
    /// Grammar the file was parsed with
    pub language: Language,
    /// Leading documentation, capped at `DOCSTRING_MAX_CHARS` plus marker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docstring: Option<String>,
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} @ {}:{}",
            self.kind, self.name, self.filepath, self.line
        )?;
        if let Some(doc) = self.docstring.as_deref().filter(|d| !d.is_empty()) {
            write!(f, " - {doc}")?;
        }
        Ok(())
    }
}

/// Cap a docstring at `DOCSTRING_MAX_CHARS` characters.
///
/// Counts characters, not bytes, so multi-byte text is never split.
#[must_use]
pub fn truncate_docstring(doc: &str) -> String {
    match doc.char_indices().nth(DOCSTRING_MAX_CHARS) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &doc[..cut]),
        None => doc.to_string(),
    }
}
