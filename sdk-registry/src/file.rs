use std::path::{Path, PathBuf};

use sirasdk_ir::RestClass;

use crate::{RegistryDocument, RegistryError, RestRegistry, Result};

/// A registry document on disk, with both raw content and parsed classes.
#[derive(Debug)]
pub struct RegistryFile {
    path: PathBuf,
    content: String,
    document: RegistryDocument,
}

impl RegistryFile {
    /// Open and parse a registry document.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(RegistryError::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let document = RegistryDocument::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            document,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed document.
    pub fn document(&self) -> &RegistryDocument {
        &self.document
    }
}

impl RestRegistry for RegistryFile {
    fn build_classes(&self) -> Result<Vec<RestClass>> {
        self.document.build_classes()
    }

    fn resultful(&self) -> Option<bool> {
        self.document.resultful()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_and_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("registry.json");
        std::fs::write(&path, r#"{ "classes": [ { "name": "Product", "ctor": {} } ] }"#).unwrap();

        let file = RegistryFile::open(&path).unwrap();
        assert_eq!(file.path(), path.as_path());
        assert!(file.content().contains("Product"));
        assert_eq!(file.build_classes().unwrap()[0].name, "Product");
    }

    #[test]
    fn test_open_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = RegistryFile::open(temp.path().join("missing.json")).unwrap_err();
        assert!(matches!(*err, RegistryError::Io { .. }));
    }
}
