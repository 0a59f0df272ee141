//! Depth-bounded syntax tree walker.
//!
//! Visits a parsed tree and turns definition nodes into [`Symbol`]s:
//!
//! - nodes deeper than [`MAX_DEPTH`] below the root are never inspected
//! - type-definition nodes are taken at any inspected depth
//! - function-definition nodes are taken only down to [`MAX_FUNCTION_DEPTH`],
//!   which drops functions nested inside other functions
//! - a matched node that yields no name produces no symbol, but its children
//!   are still visited
//!
//! Symbols come out in document order (depth-first, children in source order).

use crate::languages::normalize_kind;
use crate::languages::tree_sitter_utils::{find_child, node_line, node_text};
use crate::types::{Language, Symbol, SymbolKind, truncate_docstring};

/// Deepest level (root = 0) whose nodes are inspected.
pub const MAX_DEPTH: usize = 3;

/// Deepest level at which function definitions are reported.
pub const MAX_FUNCTION_DEPTH: usize = 2;

/// Child kinds that carry a definition's name.
const NAME_KINDS: &[&str] = &["name", "identifier", "property_identifier", "type_identifier"];

/// Children that wrap the name one level further down, with the kinds to look
/// for inside them. Go nests `type X struct{}` as
/// `type_declaration > type_spec > type_identifier`.
const NAME_WRAPPERS: &[(&str, &[&str])] = &[("type_spec", &["type_identifier"])];

/// Leaves that end a C/C++ declarator chain.
const DECLARATOR_LEAVES: &[&str] = &[
    "identifier",
    "field_identifier",
    "destructor_name",
    "operator_name",
];

/// Extract symbols from the tree rooted at `root`.
///
/// `type_kinds` and `function_kinds` are the registry sets for `language`.
pub fn walk(
    root: &tree_sitter::Node,
    content: &str,
    filepath: &str,
    language: Language,
    type_kinds: &[&str],
    function_kinds: &[&str],
) -> Vec<Symbol> {
    let mut walker = Walker {
        content: content.as_bytes(),
        filepath,
        language,
        type_kinds,
        function_kinds,
        symbols: Vec::new(),
    };
    walker.visit(root, 0);
    walker.symbols
}

struct Walker<'a> {
    content: &'a [u8],
    filepath: &'a str,
    language: Language,
    type_kinds: &'a [&'a str],
    function_kinds: &'a [&'a str],
    symbols: Vec<Symbol>,
}

impl Walker<'_> {
    fn visit(&mut self, node: &tree_sitter::Node, depth: usize) {
        if depth > MAX_DEPTH {
            return;
        }

        let kind = node.kind();
        let raw_kind = if self.type_kinds.contains(&kind) {
            Some(SymbolKind::Class)
        } else if self.function_kinds.contains(&kind) && depth <= MAX_FUNCTION_DEPTH {
            Some(SymbolKind::Function)
        } else {
            None
        };

        if let Some(symbol) = raw_kind.and_then(|raw| self.symbol(node, raw)) {
            self.symbols.push(symbol);
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(&child, depth + 1);
        }
    }

    fn symbol(&self, node: &tree_sitter::Node, raw_kind: SymbolKind) -> Option<Symbol> {
        let name = match self.language {
            Language::C | Language::Cpp if node.kind() == "function_definition" => {
                declarator_name(node, self.content)?
            }
            _ => extract_name(node, self.content)?,
        };

        Some(Symbol {
            name,
            kind: normalize_kind(node.kind(), raw_kind),
            line: node_line(node),
            filepath: self.filepath.to_string(),
            language: self.language,
            docstring: extract_docstring(node, self.language, self.content),
        })
    }
}

/// Name of a definition node, from its immediate children or one wrapper down.
pub fn extract_name(node: &tree_sitter::Node, content: &[u8]) -> Option<String> {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if NAME_KINDS.contains(&child.kind()) {
            return non_empty(node_text(&child, content)?);
        }

        let wrapped = NAME_WRAPPERS
            .iter()
            .find(|(wrapper, _)| *wrapper == child.kind())
            .and_then(|(_, inner_kinds)| find_child(&child, inner_kinds));
        if let Some(inner) = wrapped {
            return non_empty(node_text(&inner, content)?);
        }
    }

    None
}

/// Name of a C/C++ function definition, read from its `declarator` field.
///
/// The return type is an earlier sibling (and a `type_identifier` when it is
/// a typedef), so the generic child scan would pick it up instead. Follows
/// pointer, reference and parenthesized declarators down to the identifier,
/// and takes the last segment of a qualified name (`Widget::draw` -> `draw`).
fn declarator_name(node: &tree_sitter::Node, content: &[u8]) -> Option<String> {
    let mut current = node.child_by_field_name("declarator")?;
    loop {
        if DECLARATOR_LEAVES.contains(&current.kind()) {
            return non_empty(node_text(&current, content)?);
        }
        current = current
            .child_by_field_name("declarator")
            .or_else(|| current.child_by_field_name("name"))
            .or_else(|| current.named_child(0))?;
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// Leading documentation for a definition node, where the language has a
/// convention this walker understands.
pub fn extract_docstring(
    node: &tree_sitter::Node,
    language: Language,
    content: &[u8],
) -> Option<String> {
    match language {
        Language::Python => python_docstring(node, content),
        _ => None,
    }
}

/// The string literal opening a Python class or function body.
///
/// Only the first statement of the body is examined.
fn python_docstring(node: &tree_sitter::Node, content: &[u8]) -> Option<String> {
    let block = find_child(node, &["block"])?;

    let mut cursor = block.walk();
    let first = block.children(&mut cursor).find(|child| !child.is_extra())?;

    let literal = match first.kind() {
        "string" => first,
        "expression_statement" => find_child(&first, &["string"])?,
        _ => return None,
    };

    let doc = match find_child(&literal, &["string_content"]) {
        Some(inner) => node_text(&inner, content)?.trim().to_string(),
        None => strip_quotes(node_text(&literal, content)?).to_string(),
    };

    (!doc.is_empty()).then(|| truncate_docstring(&doc))
}

fn strip_quotes(literal: &str) -> &str {
    literal.trim_matches('"').trim_matches('\'').trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::{self, tree_sitter_language};
    use crate::types::{DOCSTRING_MAX_CHARS, TRUNCATION_MARKER};

    fn walk_source(language: Language, source: &str) -> Vec<Symbol> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_language(language))
            .expect("grammar loads");
        let tree = parser.parse(source, None).expect("source parses");
        let grammar = languages::descriptor(language);

        walk(
            &tree.root_node(),
            source,
            "src/sample",
            language,
            grammar.type_kinds,
            grammar.function_kinds,
        )
    }

    #[test]
    fn python_class_with_docstring() {
        let symbols = walk_source(Language::Python, "class Foo:\n    \"\"\"doc\"\"\"\n    pass");

        assert_eq!(symbols.len(), 1);
        let foo = &symbols[0];
        assert_eq!(foo.name, "Foo");
        assert_eq!(foo.kind, SymbolKind::Class);
        assert_eq!(foo.line, 1);
        assert_eq!(foo.docstring.as_deref(), Some("doc"));
        assert_eq!(foo.language, Language::Python);
        assert_eq!(foo.filepath, "src/sample");
    }

    #[test]
    fn python_nested_function_is_suppressed() {
        let source = "def outer():\n    def inner():\n        pass\n    return inner\n";
        let symbols = walk_source(Language::Python, source);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "outer");
        assert_eq!(symbols[0].kind, SymbolKind::Function);
    }

    #[test]
    fn python_methods_sit_below_function_depth() {
        // module > class_definition > block > function_definition puts methods at depth 3
        let source = "class Service:\n    def run(self):\n        pass\n";
        let symbols = walk_source(Language::Python, source);

        let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Service"]);
    }

    #[test]
    fn python_decorated_function_is_found() {
        let source = "@app.route('/')\ndef index():\n    return 'ok'\n";
        let symbols = walk_source(Language::Python, source);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "index");
        assert_eq!(symbols[0].line, 2);
    }

    #[test]
    fn python_docstring_is_trimmed() {
        let source = "def f():\n    \"\"\"\n    Does things.\n    \"\"\"\n    pass\n";
        let symbols = walk_source(Language::Python, source);

        assert_eq!(symbols[0].docstring.as_deref(), Some("Does things."));
    }

    #[test]
    fn python_single_quoted_docstring() {
        let source = "def f():\n    'Short doc.'\n    return 1\n";
        let symbols = walk_source(Language::Python, source);

        assert_eq!(symbols[0].docstring.as_deref(), Some("Short doc."));
    }

    #[test]
    fn python_docstring_must_be_first_statement() {
        let source = "def f():\n    x = 1\n    \"\"\"not a docstring\"\"\"\n";
        let symbols = walk_source(Language::Python, source);

        assert_eq!(symbols[0].docstring, None);
    }

    #[test]
    fn python_empty_docstring_is_absent() {
        let source = "class Empty:\n    \"\"\"\"\"\"\n";
        let symbols = walk_source(Language::Python, source);

        assert_eq!(symbols[0].name, "Empty");
        assert_eq!(symbols[0].docstring, None);
    }

    #[test]
    fn long_docstring_is_truncated() {
        let body = "a".repeat(DOCSTRING_MAX_CHARS + 40);
        let source = format!("def f():\n    \"\"\"{body}\"\"\"\n");
        let symbols = walk_source(Language::Python, &source);

        let doc = symbols[0].docstring.as_deref().expect("docstring");
        assert_eq!(doc.len(), DOCSTRING_MAX_CHARS + TRUNCATION_MARKER.len());
        assert!(doc.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn go_struct_name_comes_from_type_spec() {
        let source = "package main\n\ntype Server struct {\n\tAddr string\n}\n\nfunc main() {}\n";
        let symbols = walk_source(Language::Go, source);

        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0].name, "Server");
        assert_eq!(symbols[0].kind, SymbolKind::Struct);
        assert_eq!(symbols[0].line, 3);
        assert_eq!(symbols[1].name, "main");
        assert_eq!(symbols[1].kind, SymbolKind::Function);
    }

    #[test]
    fn rust_struct_trait_and_function() {
        let source = "pub struct Config {\n    port: u16,\n}\n\npub trait Handler {}\n\nfn start() {}\n";
        let symbols = walk_source(Language::Rust, source);

        let found: Vec<_> = symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
        assert_eq!(
            found,
            vec![
                ("Config", SymbolKind::Struct),
                ("Handler", SymbolKind::Interface),
                ("start", SymbolKind::Function),
            ]
        );
    }

    #[test]
    fn rust_impl_methods_sit_below_function_depth() {
        // source_file > impl_item > declaration_list > function_item
        let source = "struct A;\nimpl A {\n    fn new() -> Self { A }\n}\n";
        let symbols = walk_source(Language::Rust, source);

        assert!(symbols.iter().any(|s| s.name == "A" && s.kind == SymbolKind::Struct));
        assert!(!symbols.iter().any(|s| s.name == "new"));
    }

    #[test]
    fn typescript_interface_and_class() {
        let source = "export interface Repo {\n  find(id: string): void;\n}\n\nclass UserRepo {}\n";
        let symbols = walk_source(Language::TypeScript, source);

        assert!(
            symbols
                .iter()
                .any(|s| s.name == "Repo" && s.kind == SymbolKind::Interface)
        );
        assert!(
            symbols
                .iter()
                .any(|s| s.name == "UserRepo" && s.kind == SymbolKind::Class && s.line == 5)
        );
    }

    #[test]
    fn javascript_function_declaration() {
        let symbols = walk_source(Language::JavaScript, "function render(props) {\n  return null;\n}\n");

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "render");
        assert_eq!(symbols[0].kind, SymbolKind::Function);
    }

    #[test]
    fn java_class_is_a_class() {
        let source = "public class UserService {\n    public void save() {}\n}\n";
        let symbols = walk_source(Language::Java, source);

        assert_eq!(symbols[0].name, "UserService");
        assert_eq!(symbols[0].kind, SymbolKind::Class);
    }

    #[test]
    fn c_typedef_return_type_is_not_the_name() {
        let source = "typedef int Point;\nPoint make(void) { return 0; }\n";
        let symbols = walk_source(Language::C, source);

        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols[0].name, "make");
        assert_eq!(symbols[0].kind, SymbolKind::Function);
        assert_eq!(symbols[0].line, 2);
    }

    #[test]
    fn c_pointer_return_unwraps_declarator() {
        let source = "typedef char Byte;\nByte *alloc_buffer(void) { return 0; }\n";
        let symbols = walk_source(Language::C, source);

        let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["alloc_buffer"]);
    }

    #[test]
    fn cpp_qualified_definition_takes_last_segment() {
        let source = "void Widget::draw() {}\n\nconst Widget &current() { return w; }\n";
        let symbols = walk_source(Language::Cpp, source);

        let names: Vec<_> = symbols.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["draw", "current"]);
    }

    #[test]
    fn c_function_name_comes_from_declarator() {
        let source = "struct Point {\n    int x;\n};\n\nint add(int a, int b) {\n    return a + b;\n}\n";
        let symbols = walk_source(Language::C, source);

        let found: Vec<_> = symbols.iter().map(|s| (s.name.as_str(), s.kind)).collect();
        assert_eq!(
            found,
            vec![("Point", SymbolKind::Struct), ("add", SymbolKind::Function)]
        );
    }

    #[test]
    fn anonymous_definitions_are_dropped() {
        // Arrow functions with parenthesized params have no name child
        let source = "export default () => 42;\n";
        let symbols = walk_source(Language::JavaScript, source);

        assert!(symbols.is_empty());
    }

    #[test]
    fn docstrings_only_for_python() {
        let symbols = walk_source(Language::Rust, "/// Docs\nfn documented() {}\n");

        assert_eq!(symbols[0].docstring, None);
    }

    #[test]
    fn walking_is_deterministic() {
        let source = "class A:\n    pass\n\ndef b():\n    pass\n\nclass C:\n    pass\n";

        assert_eq!(
            walk_source(Language::Python, source),
            walk_source(Language::Python, source)
        );
    }

    #[test]
    fn strip_quotes_removes_quote_runs_and_whitespace() {
        assert_eq!(strip_quotes("\"\"\" text \"\"\""), "text");
        assert_eq!(strip_quotes("''' text '''"), "text");
    }
}
