use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::core::config::DEFAULT_TOP;
use crate::core::CallGraph;

/// Markdown summary ranking callers by fan-out and callees by fan-in
pub struct ReportFormatter {
    top: usize,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { top: DEFAULT_TOP }
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    pub fn format_to_file(&self, graph: &CallGraph, output_path: &Path) -> Result<()> {
        let content = self.format_report(graph);
        fs::write(output_path, content)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        Ok(())
    }

    pub fn format_report(&self, graph: &CallGraph) -> String {
        let mut report = String::from("# Function Call Analysis\n\n");
        report.push_str(&format!(
            "Total functions found: {}\n",
            graph.definition_count()
        ));
        report.push_str(&format!(
            "Functions with outgoing calls: {}\n\n",
            graph.caller_count()
        ));

        report.push_str(&format!(
            "## Top {} Functions by Outgoing Calls\n\n",
            self.top
        ));
        for (name, count) in top_callers(graph, self.top) {
            report.push_str(&format!("- **{}**: {} calls\n", name, count));
        }

        report.push_str("\n## Functions Called Most Frequently\n\n");
        for (name, count) in most_called(graph, self.top) {
            report.push_str(&format!("- **{}**: called {} times\n", name, count));
        }

        report
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Callers ordered by the size of their callee set, largest first.
pub fn top_callers(graph: &CallGraph, limit: usize) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = graph
        .calls()
        .iter()
        .map(|(caller, callees)| (caller.as_str(), callees.len()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Callee names ordered by how many callers reference them, largest first.
///
/// Unresolved names (library calls, `this.x`) are counted too. Each caller
/// contributes at most one reference per callee.
pub fn most_called(graph: &CallGraph, limit: usize) -> Vec<(&str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for callees in graph.calls().values() {
        for callee in callees {
            *counts.entry(callee.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
