pub mod common;
pub mod ecmascript;
pub mod javascript;
pub mod typescript;
pub mod vue;

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Syntactic shape a definition was found in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Function, // function name() {}
    Variable, // const name = () => {} / function () {}
    Method,   // class C { name() {} }
}

/// One function-like definition and the callee names in its body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    pub file_path: PathBuf,
    pub line_number: usize,
    pub calls: BTreeSet<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub declarations: Vec<Declaration>,
}

pub trait LanguageParser {
    fn parse_file(&self, file_path: &Path) -> Result<ParseResult>;
    fn language_name(&self) -> &str;
}

pub struct ParserFactory;

impl ParserFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_parser(&self, language: &str) -> Result<Box<dyn LanguageParser + Send + Sync>> {
        match language {
            "typescript" => Ok(Box::new(typescript::TypeScriptParser::new())),
            "tsx" => Ok(Box::new(typescript::TypeScriptParser::tsx())),
            "javascript" => Ok(Box::new(javascript::JavaScriptParser::new())),
            "vue" => Ok(Box::new(vue::VueParser::new()?)),
            _ => anyhow::bail!("Unsupported language: {}", language),
        }
    }
}

impl Default for ParserFactory {
    fn default() -> Self {
        Self::new()
    }
}
