use anyhow::Result;
use std::path::Path;

use super::common::{read_source, TreeSitterParser};
use super::ecmascript::DeclarationScanner;
use super::{LanguageParser, ParseResult};

/// JavaScript and JSX sources
pub struct JavaScriptParser;

impl JavaScriptParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_source(
        &self,
        source: &str,
        file_path: &Path,
        line_offset: usize,
    ) -> Result<ParseResult> {
        let mut parser = TreeSitterParser::new(tree_sitter_javascript::language())?;
        let tree = parser.parse_source(source, file_path)?;

        let declarations = DeclarationScanner::new(source.as_bytes(), file_path)
            .with_line_offset(line_offset)
            .scan(&tree.root_node());

        Ok(ParseResult { declarations })
    }
}

impl Default for JavaScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageParser for JavaScriptParser {
    fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        let source = read_source(file_path)?;
        self.parse_source(&source, file_path, 0)
    }

    fn language_name(&self) -> &str {
        "javascript"
    }
}
