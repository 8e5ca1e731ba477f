use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_OUTPUT_DIR: &str = "codemap-output";
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "vue", "jsx", "js"];
pub const DEFAULT_TOP: usize = 10;

/// The few `tsconfig.json` fields that are looked at. Only for diagnostics:
/// the scanned directory never comes from here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    #[serde(default)]
    pub compiler_options: Option<CompilerOptions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub root_dir: Option<String>,
}

/// Where to look for sources and where to write results
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub root: PathBuf,
    pub tsconfig_path: PathBuf,
    pub source_dir: String,
    pub extensions: Vec<String>,
    pub output_dir: PathBuf,
    pub top: usize,
}

impl ProjectConfig {
    /// Load the project configuration file. The project root is the directory
    /// that contains it.
    pub fn load(tsconfig_path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(tsconfig_path).with_context(|| {
            format!(
                "Failed to read project config {}",
                tsconfig_path.display()
            )
        })?;
        let tsconfig = read_tsconfig(&raw)
            .with_context(|| format!("Invalid project config {}", tsconfig_path.display()))?;

        let tsconfig_path = fs::canonicalize(tsconfig_path)
            .with_context(|| format!("Failed to resolve {}", tsconfig_path.display()))?;
        let root = tsconfig_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("/"));

        let source_dir = DEFAULT_SOURCE_DIR.to_string();
        if let Some(root_dir) = tsconfig.compiler_options.and_then(|options| options.root_dir) {
            tracing::debug!(
                root_dir = %root_dir,
                "Ignoring compilerOptions.rootDir; sources are read from {}",
                source_dir
            );
        }

        tracing::debug!(
            root = %root.display(),
            source_dir = %source_dir,
            "Loaded project config"
        );

        Ok(Self {
            root,
            tsconfig_path,
            source_dir,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            top: DEFAULT_TOP,
        })
    }

    pub fn with_source_dir(mut self, source_dir: &str) -> Self {
        self.source_dir = normalize_dir(source_dir);
        self
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = output_dir;
        self
    }

    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Directory the source files are collected from
    pub fn source_root(&self) -> PathBuf {
        self.root.join(&self.source_dir)
    }
}

/// Plain JSON first, then JSON5 for the comments and trailing commas that
/// `tsc --init` leaves behind.
fn read_tsconfig(raw: &str) -> Result<TsConfig> {
    if let Ok(tsconfig) = serde_json::from_str(raw) {
        return Ok(tsconfig);
    }
    json5::from_str(raw).map_err(anyhow::Error::from)
}

fn normalize_dir(dir: &str) -> String {
    dir.replace('\\', "/")
        .trim_start_matches("./")
        .trim_end_matches('/')
        .to_string()
}
