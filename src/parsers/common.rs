use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tree_sitter::{Language, Node as TSNode, Parser, Tree};

pub struct TreeSitterParser {
    parser: Parser,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self { parser })
    }

    pub fn parse_source(&mut self, source: &str, file_path: &Path) -> Result<Tree> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| anyhow::anyhow!("Failed to parse file: {}", file_path.display()))?;

        // The grammar recovers from syntax errors; keep whatever was understood.
        if tree.root_node().has_error() {
            tracing::debug!(
                file = %file_path.display(),
                "Syntax errors found; continuing with partial tree"
            );
        }

        Ok(tree)
    }
}

pub fn read_source(file_path: &Path) -> Result<String> {
    fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))
}

pub fn extract_text<'a>(node: &TSNode, source: &'a [u8]) -> &'a str {
    std::str::from_utf8(&source[node.byte_range()]).unwrap_or("")
}

pub fn find_children_by_kind<'tree>(node: &TSNode<'tree>, kind: &str) -> Vec<TSNode<'tree>> {
    let mut cursor = node.walk();
    let children = node
        .children(&mut cursor)
        .filter(|child| child.kind() == kind)
        .collect();
    children
}

/// Named children in source order
pub fn named_children<'tree>(node: &TSNode<'tree>) -> Vec<TSNode<'tree>> {
    let mut cursor = node.walk();
    let children = node
        .children(&mut cursor)
        .filter(|child| child.is_named())
        .collect();
    children
}

/// True when `node` has an anonymous keyword child such as `get` or `set`
pub fn has_keyword_child(node: &TSNode, keyword: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == keyword);
    found
}
