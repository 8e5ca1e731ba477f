use anyhow::Result;
use std::path::Path;
use tree_sitter::Language;

use super::common::{read_source, TreeSitterParser};
use super::ecmascript::DeclarationScanner;
use super::{LanguageParser, ParseResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dialect {
    TypeScript,
    Tsx,
}

impl Dialect {
    fn language(self) -> Language {
        match self {
            Dialect::TypeScript => tree_sitter_typescript::language_typescript(),
            Dialect::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }
}

pub struct TypeScriptParser {
    dialect: Dialect,
}

impl TypeScriptParser {
    pub fn new() -> Self {
        Self {
            dialect: Dialect::TypeScript,
        }
    }

    /// Parser for `.tsx` sources
    pub fn tsx() -> Self {
        Self {
            dialect: Dialect::Tsx,
        }
    }

    /// Scan TypeScript source that did not come straight from a file.
    pub fn parse_source(
        &self,
        source: &str,
        file_path: &Path,
        line_offset: usize,
    ) -> Result<ParseResult> {
        let mut parser = TreeSitterParser::new(self.dialect.language())?;
        let tree = parser.parse_source(source, file_path)?;

        let declarations = DeclarationScanner::new(source.as_bytes(), file_path)
            .with_line_offset(line_offset)
            .scan(&tree.root_node());

        Ok(ParseResult { declarations })
    }
}

impl Default for TypeScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageParser for TypeScriptParser {
    fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        let source = read_source(file_path)?;
        self.parse_source(&source, file_path, 0)
    }

    fn language_name(&self) -> &str {
        match self.dialect {
            Dialect::TypeScript => "typescript",
            Dialect::Tsx => "tsx",
        }
    }
}
