//! Language registry.
//!
//! Static tables mapping file extensions to grammars, and grammars to the
//! tree-sitter node kinds that count as type or function definitions.
//! Grammars name "class-like" and "function-like" constructs very differently,
//! so the per-language behaviour lives entirely in this data. The walker only
//! does string matching against it.
//!
//! ## Adding a New Language
//!
//! 1. Add the variant to `Language` in `types.rs` (and to `Language::ALL`)
//! 2. Add a `GrammarDescriptor` to `GRAMMARS` at the variant's position
//! 3. Return its tree-sitter grammar from `tree_sitter_language()`
//! 4. Add any new node kinds to `normalize_kind()`

pub mod tree_sitter_utils;

use std::path::Path;

use crate::types::{Language, SymbolKind};

/// Node kinds and extensions for one grammar.
#[derive(Debug)]
pub struct GrammarDescriptor {
    /// The language this entry describes
    pub language: Language,
    /// Extensions without the leading dot, lowercase
    pub extensions: &'static [&'static str],
    /// Node kinds that define classes, structs, interfaces and the like
    pub type_kinds: &'static [&'static str],
    /// Node kinds that define functions and methods
    pub function_kinds: &'static [&'static str],
}

const TS_TYPE_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "type_alias_declaration",
];

const JS_FUNCTION_KINDS: &[&str] = &["function_declaration", "arrow_function", "method_definition"];

/// The registry, indexed by `Language` discriminant (`Language::ALL` order).
pub static GRAMMARS: [GrammarDescriptor; Language::ALL.len()] = [
    GrammarDescriptor {
        language: Language::Python,
        extensions: &["py", "pyi"],
        type_kinds: &["class_definition"],
        function_kinds: &["function_definition"],
    },
    GrammarDescriptor {
        language: Language::JavaScript,
        extensions: &["js", "jsx"],
        type_kinds: &["class_declaration"],
        function_kinds: JS_FUNCTION_KINDS,
    },
    GrammarDescriptor {
        language: Language::TypeScript,
        extensions: &["ts"],
        type_kinds: TS_TYPE_KINDS,
        function_kinds: JS_FUNCTION_KINDS,
    },
    GrammarDescriptor {
        language: Language::Tsx,
        extensions: &["tsx"],
        type_kinds: TS_TYPE_KINDS,
        function_kinds: JS_FUNCTION_KINDS,
    },
    // Go has no struct node of its own; structs hide under a type declaration.
    GrammarDescriptor {
        language: Language::Go,
        extensions: &["go"],
        type_kinds: &["type_declaration"],
        function_kinds: &["function_declaration", "method_declaration"],
    },
    GrammarDescriptor {
        language: Language::Rust,
        extensions: &["rs"],
        type_kinds: &["struct_item", "trait_item"],
        function_kinds: &["function_item"],
    },
    GrammarDescriptor {
        language: Language::Java,
        extensions: &["java"],
        type_kinds: &["class_declaration", "interface_declaration"],
        function_kinds: &["method_declaration", "constructor_declaration"],
    },
    GrammarDescriptor {
        language: Language::Kotlin,
        extensions: &["kt"],
        type_kinds: &[
            "class_declaration",
            "object_declaration",
            "interface_declaration",
        ],
        function_kinds: &["function_declaration"],
    },
    GrammarDescriptor {
        language: Language::C,
        extensions: &["c", "h"],
        type_kinds: &["struct_specifier"],
        function_kinds: &["function_definition"],
    },
    GrammarDescriptor {
        language: Language::Cpp,
        extensions: &["cpp", "hpp", "cc"],
        type_kinds: &["class_specifier", "struct_specifier"],
        function_kinds: &["function_definition"],
    },
    GrammarDescriptor {
        language: Language::CSharp,
        extensions: &["cs"],
        type_kinds: &[
            "class_declaration",
            "interface_declaration",
            "struct_declaration",
        ],
        function_kinds: &["method_declaration", "constructor_declaration"],
    },
    GrammarDescriptor {
        language: Language::Ruby,
        extensions: &["rb"],
        type_kinds: &["class"],
        function_kinds: &["method", "singleton_method"],
    },
    GrammarDescriptor {
        language: Language::Php,
        extensions: &["php"],
        type_kinds: &[
            "class_declaration",
            "interface_declaration",
            "trait_declaration",
        ],
        function_kinds: &["function_definition", "method_declaration"],
    },
    GrammarDescriptor {
        language: Language::Swift,
        extensions: &["swift"],
        type_kinds: &[
            "class_declaration",
            "struct_declaration",
            "protocol_declaration",
        ],
        function_kinds: &["function_declaration"],
    },
    GrammarDescriptor {
        language: Language::Scala,
        extensions: &["scala"],
        type_kinds: &["class_definition", "object_definition", "trait_definition"],
        function_kinds: &["function_definition"],
    },
];

/// Registry entry for a language.
#[must_use]
pub fn descriptor(language: Language) -> &'static GrammarDescriptor {
    &GRAMMARS[language as usize]
}

/// Detect the grammar for a path from its extension (case-insensitive).
#[must_use]
pub fn detect_language(path: &str) -> Option<Language> {
    let ext = Path::new(path).extension()?.to_str()?;
    Language::from_extension(ext)
}

/// Type-definition node kinds for a grammar id; empty for unknown ids.
#[must_use]
pub fn type_node_kinds(grammar_id: &str) -> &'static [&'static str] {
    match Language::from_grammar_id(grammar_id) {
        Some(lang) => lang.grammar().type_kinds,
        None => &[],
    }
}

/// Function-definition node kinds for a grammar id; empty for unknown ids.
#[must_use]
pub fn function_node_kinds(grammar_id: &str) -> &'static [&'static str] {
    match Language::from_grammar_id(grammar_id) {
        Some(lang) => lang.grammar().function_kinds,
        None => &[],
    }
}

/// Every registered extension, dot-prefixed (e.g. `.py`).
#[must_use]
pub fn supported_extensions() -> Vec<String> {
    GRAMMARS
        .iter()
        .flat_map(|g| g.extensions.iter().map(|ext| format!(".{ext}")))
        .collect()
}

/// Map a grammar-specific node kind onto the shared kind vocabulary.
///
/// Kinds missing from the table keep `default` (the branch that matched).
#[must_use]
pub fn normalize_kind(node_kind: &str, default: SymbolKind) -> SymbolKind {
    match node_kind {
        "class_definition" | "class_declaration" | "class_specifier" | "object_declaration"
        | "object_definition" => SymbolKind::Class,

        "struct_specifier" | "struct_item" | "struct_declaration" | "type_declaration" => {
            SymbolKind::Struct
        }

        "interface_declaration"
        | "trait_item"
        | "trait_definition"
        | "protocol_declaration"
        | "type_alias_declaration" => SymbolKind::Interface,

        _ => default,
    }
}

/// Tree-sitter grammar for a language.
#[must_use]
pub fn tree_sitter_language(language: Language) -> tree_sitter::Language {
    match language {
        Language::Python => tree_sitter_python::LANGUAGE.into(),
        Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Language::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        Language::Go => tree_sitter_go::LANGUAGE.into(),
        Language::Rust => tree_sitter_rust::LANGUAGE.into(),
        Language::Java => tree_sitter_java::LANGUAGE.into(),
        Language::Kotlin => tree_sitter_kotlin_ng::LANGUAGE.into(),
        Language::C => tree_sitter_c::LANGUAGE.into(),
        Language::Cpp => tree_sitter_cpp::LANGUAGE.into(),
        Language::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
        Language::Ruby => tree_sitter_ruby::LANGUAGE.into(),
        Language::Php => tree_sitter_php::LANGUAGE_PHP.into(),
        Language::Swift => tree_sitter_swift::LANGUAGE.into(),
        Language::Scala => tree_sitter_scala::LANGUAGE.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn registry_follows_language_order() {
        for (index, lang) in Language::ALL.into_iter().enumerate() {
            assert_eq!(lang as usize, index);
            assert_eq!(GRAMMARS[index].language, lang);
            assert_eq!(descriptor(lang).language, lang);
        }
    }

    #[rstest]
    #[case::py("src/main.py", Language::Python)]
    #[case::pyi("src/types.pyi", Language::Python)]
    #[case::js("src/app.js", Language::JavaScript)]
    #[case::jsx("src/component.jsx", Language::JavaScript)]
    #[case::ts("src/app.ts", Language::TypeScript)]
    #[case::tsx("src/component.tsx", Language::Tsx)]
    #[case::go("cmd/server/main.go", Language::Go)]
    #[case::rs("src/lib.rs", Language::Rust)]
    #[case::java("src/Main.java", Language::Java)]
    #[case::kt("app/Main.kt", Language::Kotlin)]
    #[case::c("src/util.c", Language::C)]
    #[case::h("include/util.h", Language::C)]
    #[case::cpp("src/engine.cpp", Language::Cpp)]
    #[case::hpp("include/engine.hpp", Language::Cpp)]
    #[case::cc("src/engine.cc", Language::Cpp)]
    #[case::cs("Services/UserService.cs", Language::CSharp)]
    #[case::rb("lib/user.rb", Language::Ruby)]
    #[case::php("src/User.php", Language::Php)]
    #[case::swift("Sources/App.swift", Language::Swift)]
    #[case::scala("src/main/scala/App.scala", Language::Scala)]
    #[case::uppercase("SRC/MAIN.PY", Language::Python)]
    fn detects_documented_grammar(#[case] path: &str, #[case] expected: Language) {
        assert_eq!(detect_language(path), Some(expected));
    }

    #[rstest]
    #[case::markdown("README.md")]
    #[case::json("data.json")]
    #[case::no_extension("Makefile")]
    #[case::dotfile(".gitignore")]
    #[case::unknown("file.unknown")]
    fn unknown_extensions_are_none(#[case] path: &str) {
        assert_eq!(detect_language(path), None);
    }

    #[test]
    fn node_kinds_for_unknown_grammar_are_empty() {
        assert!(type_node_kinds("brainfuck").is_empty());
        assert!(function_node_kinds("brainfuck").is_empty());
    }

    #[test]
    fn node_kinds_by_grammar_id() {
        assert_eq!(type_node_kinds("go"), &["type_declaration"]);
        assert_eq!(function_node_kinds("rust"), &["function_item"]);
        assert!(type_node_kinds("tsx").contains(&"type_alias_declaration"));
    }

    #[test]
    fn every_grammar_has_function_kinds() {
        for grammar in &GRAMMARS {
            assert!(
                !grammar.function_kinds.is_empty(),
                "{} has no function kinds",
                grammar.language
            );
        }
    }

    #[test]
    fn every_registered_type_kind_normalizes_to_a_type() {
        for grammar in &GRAMMARS {
            for kind in grammar.type_kinds {
                let normalized = normalize_kind(kind, SymbolKind::Class);
                assert!(normalized.is_type(), "{kind} normalized to {normalized}");
            }
        }
    }

    #[test]
    fn function_kinds_keep_default() {
        for grammar in &GRAMMARS {
            for kind in grammar.function_kinds {
                assert_eq!(
                    normalize_kind(kind, SymbolKind::Function),
                    SymbolKind::Function
                );
            }
        }
    }

    #[rstest]
    #[case::python_class("class_definition", SymbolKind::Class)]
    #[case::kotlin_object("object_declaration", SymbolKind::Class)]
    #[case::scala_object("object_definition", SymbolKind::Class)]
    #[case::cpp_class("class_specifier", SymbolKind::Class)]
    #[case::c_struct("struct_specifier", SymbolKind::Struct)]
    #[case::rust_struct("struct_item", SymbolKind::Struct)]
    #[case::swift_struct("struct_declaration", SymbolKind::Struct)]
    #[case::go_type("type_declaration", SymbolKind::Struct)]
    #[case::java_interface("interface_declaration", SymbolKind::Interface)]
    #[case::rust_trait("trait_item", SymbolKind::Interface)]
    #[case::scala_trait("trait_definition", SymbolKind::Interface)]
    #[case::swift_protocol("protocol_declaration", SymbolKind::Interface)]
    #[case::ts_alias("type_alias_declaration", SymbolKind::Interface)]
    fn normalization_table(#[case] node_kind: &str, #[case] expected: SymbolKind) {
        assert_eq!(normalize_kind(node_kind, SymbolKind::Function), expected);
    }

    #[test]
    fn unmapped_kinds_keep_default() {
        // Ruby's `class` node and PHP traits are not in the table
        assert_eq!(normalize_kind("class", SymbolKind::Class), SymbolKind::Class);
        assert_eq!(
            normalize_kind("trait_declaration", SymbolKind::Class),
            SymbolKind::Class
        );
    }

    #[test]
    fn supported_extensions_are_dot_prefixed() {
        let exts = supported_extensions();

        assert!(exts.contains(&".py".to_string()));
        assert!(exts.contains(&".scala".to_string()));
        assert!(exts.iter().all(|e| e.starts_with('.')));
    }

    #[test]
    fn every_grammar_loads() {
        for lang in Language::ALL {
            let mut parser = tree_sitter::Parser::new();
            parser
                .set_language(&tree_sitter_language(lang))
                .unwrap_or_else(|e| panic!("{lang} grammar failed to load: {e}"));
        }
    }

    proptest! {
        #[test]
        fn unregistered_extensions_are_none(stem in "[a-z]{1,8}", ext in "[a-z]{1,6}") {
            prop_assume!(Language::from_extension(&ext).is_none());
            let path = format!("src/{stem}.{ext}");
            prop_assert_eq!(detect_language(&path), None);
        }

        #[test]
        fn detection_ignores_directory_and_case(dir in "[a-zA-Z_/]{0,20}", stem in "[a-zA-Z]{1,8}") {
            for lang in Language::ALL {
                for ext in lang.extensions() {
                    let path = format!("{dir}/{stem}.{}", ext.to_uppercase());
                    prop_assert_eq!(detect_language(&path), Some(lang));
                }
            }
        }
    }
}
