//! Shared tree-sitter utilities.
//!
//! Text and position helpers used by the walker for every grammar.

// Tree-sitter returns usize for positions, but symbols store u32 lines.
// No practical source file has 4 billion lines.
#![allow(clippy::cast_possible_truncation)]

/// Get text content of a tree-sitter node.
///
/// Returns `None` if the node's byte range contains invalid UTF-8.
pub fn node_text<'a>(node: &tree_sitter::Node, content: &'a [u8]) -> Option<&'a str> {
    match node.utf8_text(content) {
        Ok(s) => Some(s),
        Err(e) => {
            tracing::trace!(
                byte_range = ?node.byte_range(),
                error = %e,
                node_kind = %node.kind(),
                "Failed to decode node text as UTF-8"
            );
            None
        }
    }
}

/// 1-indexed line on which a node starts.
pub fn node_line(node: &tree_sitter::Node) -> u32 {
    node.start_position().row as u32 + 1
}

/// First immediate child whose kind is in `kinds`.
pub fn find_child<'tree>(
    node: &tree_sitter::Node<'tree>,
    kinds: &[&str],
) -> Option<tree_sitter::Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| kinds.contains(&child.kind()))
}
