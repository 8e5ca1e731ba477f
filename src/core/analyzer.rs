use anyhow::{Context, Result};

use super::{CallGraph, FileScanner, ProjectConfig};
use crate::parsers::ParserFactory;

pub struct CodebaseAnalyzer {
    file_scanner: FileScanner,
    parser_factory: ParserFactory,
}

/// Result of one analysis pass
#[derive(Debug, Clone)]
pub struct Analysis {
    pub files_analyzed: usize,
    pub graph: CallGraph,
}

impl CodebaseAnalyzer {
    pub fn new() -> Self {
        Self {
            file_scanner: FileScanner::new(),
            parser_factory: ParserFactory::new(),
        }
    }

    /// Scan every source file once, in enumeration order, and fold the
    /// declarations into a call graph. The first failing file aborts the run.
    pub fn analyze(&self, config: &ProjectConfig) -> Result<Analysis> {
        let extensions: Vec<&str> = config.extensions.iter().map(String::as_str).collect();
        let files = self
            .file_scanner
            .scan_directory(&config.source_root(), &extensions)?;

        println!("Analyzing {} files...", files.len());

        let mut graph = CallGraph::new();

        for file_info in &files {
            let parser = self.parser_factory.get_parser(&file_info.language)?;
            let result = parser
                .parse_file(&file_info.path)
                .with_context(|| format!("Failed to analyze {}", file_info.path.display()))?;

            tracing::debug!(
                file = %file_info.path.display(),
                language = parser.language_name(),
                declarations = result.declarations.len(),
                "Scanned file"
            );

            for declaration in result.declarations {
                graph.record(declaration);
            }
        }

        println!("Found {} functions", graph.definition_count());
        println!("Found {} functions with calls", graph.caller_count());

        Ok(Analysis {
            files_analyzed: files.len(),
            graph,
        })
    }
}

impl Default for CodebaseAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
