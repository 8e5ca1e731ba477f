use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use super::{DotFormatter, ReportFormatter};
use crate::core::{CallGraph, ProjectConfig};

pub const DOT_FILE_NAME: &str = "function-calls.dot";
pub const REPORT_FILE_NAME: &str = "function-analysis-report.md";

/// Files written by [`write_outputs`]
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub dot: PathBuf,
    pub report: PathBuf,
}

/// Create the output directory if needed and write the DOT graph and the
/// Markdown report into it under their fixed names.
pub fn write_outputs(config: &ProjectConfig, graph: &CallGraph) -> Result<OutputPaths> {
    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let paths = OutputPaths {
        dot: config.output_dir.join(DOT_FILE_NAME),
        report: config.output_dir.join(REPORT_FILE_NAME),
    };

    DotFormatter::new()
        .with_source_root(&config.source_root())
        .format_to_file(graph, &paths.dot)?;
    ReportFormatter::new()
        .with_top(config.top)
        .format_to_file(graph, &paths.report)?;

    tracing::debug!(
        dot = %paths.dot.display(),
        report = %paths.report.display(),
        "Wrote outputs"
    );

    Ok(paths)
}
