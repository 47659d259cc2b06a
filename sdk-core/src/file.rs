use std::path::{Path, PathBuf};

use eyre::{Context, Result};

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// A generated file waiting to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (no header)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    /// Replace the write rules
    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content, including the header line if one is set
    pub fn content(&self) -> String {
        match self.rules.header {
            Some(header) => format!("{}\n{}", header, self.content),
            None => self.content.clone(),
        }
    }

    /// Write the file, replacing any existing one
    pub fn write(&self) -> Result<()> {
        write_file(&self.path, &self.content())
    }
}

/// Rules that determine how a file is written
#[derive(Debug, Clone, Default)]
pub struct FileRules {
    /// Line written above the content.
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for generated code: a do-not-edit header.
    pub fn generated() -> Self {
        Self {
            header: Some("// Generated by sira-sdk. Do not edit."),
        }
    }
}
