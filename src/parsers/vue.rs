use anyhow::Result;
use regex::Regex;
use std::path::Path;

use super::common::read_source;
use super::javascript::JavaScriptParser;
use super::typescript::TypeScriptParser;
use super::{LanguageParser, ParseResult};

/// Vue single-file components. Each `<script>` block is scanned with the
/// grammar named by its `lang` attribute; the template and styles are ignored.
pub struct VueParser {
    script_block: Regex,
    lang_attr: Regex,
}

/// A `<script>` block cut out of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBlock<'a> {
    pub lang: Option<&'a str>,
    pub content: &'a str,
    /// Zero-based line of the first content line within the component
    pub line_offset: usize,
}

impl VueParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            script_block: Regex::new(r"(?s)<script\b([^>]*)>(.*?)</script\s*>")?,
            lang_attr: Regex::new(r#"\blang\s*=\s*["']?([A-Za-z]+)"#)?,
        })
    }

    pub fn script_blocks<'a>(&self, source: &'a str) -> Vec<ScriptBlock<'a>> {
        self.script_block
            .captures_iter(source)
            .filter_map(|captures| {
                let attributes = captures.get(1)?.as_str();
                let content = captures.get(2)?;
                let lang = self
                    .lang_attr
                    .captures(attributes)
                    .and_then(|lang| lang.get(1))
                    .map(|lang| lang.as_str());
                let line_offset = source[..content.start()].matches('\n').count();

                Some(ScriptBlock {
                    lang,
                    content: content.as_str(),
                    line_offset,
                })
            })
            .collect()
    }

    pub fn parse_source(&self, source: &str, file_path: &Path) -> Result<ParseResult> {
        let mut result = ParseResult::default();

        for block in self.script_blocks(source) {
            let block_result = match block.lang {
                Some("ts") => TypeScriptParser::new().parse_source(
                    block.content,
                    file_path,
                    block.line_offset,
                )?,
                Some("tsx") => TypeScriptParser::tsx().parse_source(
                    block.content,
                    file_path,
                    block.line_offset,
                )?,
                _ => JavaScriptParser::new().parse_source(
                    block.content,
                    file_path,
                    block.line_offset,
                )?,
            };
            result.declarations.extend(block_result.declarations);
        }

        Ok(result)
    }
}

impl LanguageParser for VueParser {
    fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        let source = read_source(file_path)?;
        self.parse_source(&source, file_path)
    }

    fn language_name(&self) -> &str {
        "vue"
    }
}
