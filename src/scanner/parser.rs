use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

use crate::error::ParserError;

pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self, ParserError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(ParserError::language_setup_failed)?;
        Ok(Self { parser })
    }

    /// Parses `source`, rejecting any tree that needed error recovery.
    pub fn parse(&mut self, source: &str, path: &Path) -> Result<Tree, ParserError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ParserError::parse_failed(path))?;

        if let Some(node) = first_syntax_error(tree.root_node()) {
            let position = node.start_position();
            return Err(ParserError::syntax_error(
                path,
                position.row + 1,
                position.column + 1,
                describe_error(node, source),
            ));
        }

        Ok(tree)
    }
}

/// First `ERROR` or `MISSING` node in document order. Only subtrees flagged
/// with `has_error` are entered.
pub fn first_syntax_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }

        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        while !cursor.goto_next_sibling() {
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

fn describe_error(node: Node<'_>, source: &str) -> String {
    if node.is_missing() {
        return format!("missing '{}'", node.kind());
    }

    let text = node.utf8_text(source.as_bytes()).unwrap_or_default();
    match text.lines().next().map(str::trim) {
        Some(line) if !line.is_empty() => format!("invalid syntax near '{line}'"),
        _ => "invalid syntax".to_string(),
    }
}
