//! Tree-sitter parser integration for TypeScript
//!
//! Provides parsing using the tree-sitter TypeScript grammars (TS and
//! TSX) plus small helpers for reading node text and positions.

use std::path::Path;
use tree_sitter::{Language, Node, Parser, Tree};

/// TypeScript dialect, selected by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    pub fn from_extension(ext: &str) -> Option<Dialect> {
        match ext {
            "ts" | "mts" | "cts" => Some(Dialect::TypeScript),
            "tsx" => Some(Dialect::Tsx),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Dialect> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Dialect::from_extension)
    }
}

/// Check whether a path looks like a TypeScript source file
pub fn is_typescript_file(path: &Path) -> bool {
    Dialect::from_path(path).is_some()
}

fn language(dialect: Dialect) -> Language {
    match dialect {
        Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
    }
}

/// Parse TypeScript source into a tree-sitter tree
///
/// Tree-sitter is error-tolerant and produces a tree even for malformed
/// input; `None` only happens when the parser gives up entirely.
pub fn parse_source(source: &str, dialect: Dialect) -> Option<Tree> {
    let mut parser = Parser::new();
    parser.set_language(&language(dialect)).ok()?;
    parser.parse(source, None)
}

/// Check if a parse tree contains error nodes
pub fn has_parse_errors(tree: &Tree) -> bool {
    tree.root_node().has_error()
}

/// Get the source text for a tree-sitter node
pub fn node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

/// Get the line number for a tree-sitter node (1-indexed)
pub fn node_line(node: &Node) -> usize {
    node.start_position().row + 1
}

/// Get the column number for a tree-sitter node (1-indexed)
pub fn node_column(node: &Node) -> usize {
    node.start_position().column + 1
}
