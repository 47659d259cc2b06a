//! CodeFile abstraction for structured file generation.
//!
//! A file is a header followed by body elements separated by blank lines.

use sirasdk_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

/// Raw code that renders each line as-is.
#[derive(Debug, Clone)]
pub struct RawCode {
    content: String,
}

impl RawCode {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.content
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}

/// A structured representation of a generated source file.
///
/// # Example
///
/// ```
/// use sirasdk_codegen_js::{CodeFile, RawCode};
///
/// let source = CodeFile::new()
///     .add(RawCode::new("var a = 1;"))
///     .add(RawCode::new("var b = 2;"))
///     .render();
///
/// assert_eq!(source, "var a = 1;\n\nvar b = 2;\n");
/// ```
#[derive(Default)]
pub struct CodeFile {
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVASCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
