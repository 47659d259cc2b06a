use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for registry operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<RegistryError>>;

/// Source context for error reporting.
///
/// Encapsulates the document content and filename so error factories
/// don't need both passed around.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a serde_json error.
    pub fn parse_error(&self, source: serde_json::Error) -> Box<RegistryError> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 0)));
        Box::new(RegistryError::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `needle` if it appears in the source.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        needle: Option<&str>,
    ) -> Box<RegistryError> {
        let span = needle.and_then(|n| self.locate(n));
        Box::new(RegistryError::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Find the first occurrence of a JSON string literal in the source.
    fn locate(&self, value: &str) -> Option<SourceSpan> {
        let quoted = serde_json::Value::String(value.to_string()).to_string();
        self.src
            .find(&quoted)
            .map(|start| SourceSpan::from((start, quoted.len())))
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[derive(Debug, Error, Diagnostic)]
pub enum RegistryError {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("export the application's REST metadata to a JSON registry document"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry document")]
    #[diagnostic(code(sira::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(sira::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("failed to build REST classes: {message}")]
    #[diagnostic(code(sira::build_error))]
    Build { message: String },
}

impl RegistryError {
    /// Create a build error for registries that fail to enumerate their classes.
    pub fn build(message: impl Into<String>) -> Box<Self> {
        Box::new(RegistryError::Build {
            message: message.into(),
        })
    }
}
