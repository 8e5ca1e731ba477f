use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FileInfo {
    pub path: PathBuf,
    pub language: String,
}

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Enumerate source files under `root_path` whose extension is listed.
    ///
    /// Entries are visited in file-name order so repeated runs see the files
    /// in the same sequence.
    pub fn scan_directory(&self, root_path: &Path, extensions: &[&str]) -> Result<Vec<FileInfo>> {
        if !root_path.is_dir() {
            tracing::warn!(
                root = %root_path.display(),
                "Source directory does not exist; nothing to analyze"
            );
            return Ok(Vec::new());
        }

        let supported_extensions = self.get_languages_for_extensions(extensions);
        let mut files = Vec::new();

        for entry in WalkDir::new(root_path)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry
                .with_context(|| format!("Failed to walk {}", root_path.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
                continue;
            };

            if let Some(language) = supported_extensions.get(extension) {
                files.push(FileInfo {
                    path: path.to_path_buf(),
                    language: language.to_string(),
                });
            }
        }

        Ok(files)
    }

    fn get_languages_for_extensions<'a>(
        &self,
        extensions: &[&'a str],
    ) -> HashMap<&'a str, &'static str> {
        let mut languages = HashMap::with_capacity(extensions.len());

        for &extension in extensions {
            let language = match extension {
                "ts" | "mts" | "cts" => "typescript",
                "tsx" => "tsx",
                "js" | "jsx" | "mjs" | "cjs" => "javascript",
                "vue" => "vue",
                other => {
                    tracing::warn!(extension = other, "Ignoring unsupported extension");
                    continue;
                }
            };
            languages.insert(extension, language);
        }

        languages
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}
