//! Graphviz DOT output.
//!
//! Every definition becomes a node labeled with its name and its path below
//! the source root. Only calls that resolve to a definition become edges.

use anyhow::{Context, Result};
use petgraph::visit::EdgeRef;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::CallGraph;

#[derive(Default)]
pub struct DotFormatter {
    source_root: Option<PathBuf>,
}

impl DotFormatter {
    pub fn new() -> Self {
        Self { source_root: None }
    }

    /// Directory that node labels are made relative to
    pub fn with_source_root(mut self, source_root: &Path) -> Self {
        self.source_root = Some(source_root.to_path_buf());
        self
    }

    pub fn format_to_file(&self, graph: &CallGraph, output_path: &Path) -> Result<()> {
        let content = self.format_graph(graph);
        fs::write(output_path, content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &CallGraph) -> String {
        let dependency_graph = graph.to_dependency_graph();

        let mut dot = String::from("digraph FunctionCalls {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=box, style=rounded];\n\n");

        for index in dependency_graph.node_indices() {
            let node = &dependency_graph[index];
            let label = format!(
                "{}\\n({})",
                escape(&node.name),
                escape(&self.relative_path(&node.file_path))
            );
            dot.push_str(&format!("  \"{}\" [label=\"{}\"];\n", escape(&node.name), label));
        }

        dot.push('\n');

        for edge in dependency_graph.edge_references() {
            let caller = &dependency_graph[edge.source()].name;
            let callee = &dependency_graph[edge.target()].name;
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                escape(caller),
                escape(callee)
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Path below the source root, or the whole path when it lies elsewhere
    pub fn relative_path(&self, path: &Path) -> String {
        let relative = self
            .source_root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        relative.to_string_lossy().replace('\\', "/")
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
