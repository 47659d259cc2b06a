//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Indentation-aware writer the JavaScript AST renders into.
///
/// Templates drive it through the `push_` methods, which return
/// `&mut Self` so they can be called from loops over models.
///
/// ```
/// use sirasdk_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::javascript();
/// builder
///     .push_line("if (ok) {")
///     .push_indent()
///     .push_line("run();")
///     .push_dedent()
///     .push_line("}");
/// assert_eq!(builder.build(), "if (ok) {\n  run();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JS/TS default).
    pub fn javascript() -> Self {
        Self::new(Indent::JAVASCRIPT)
    }

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline (mutable).
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a JSDoc comment (mutable).
    ///
    /// Multi-line text is rendered as a block comment.
    pub fn push_jsdoc(&mut self, text: &str) -> &mut Self {
        let lines: Vec<&str> = text.lines().collect();
        if lines.len() <= 1 {
            self.write_indent();
            self.buffer.push_str("/** ");
            self.buffer.push_str(text.trim());
            self.buffer.push_str(" */\n");
            return self;
        }
        self.push_line("/**");
        for line in lines {
            let line = line.trim_end();
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
            CodeFragment::JsDoc(text) => {
                self.push_jsdoc(&text);
            }
        }
    }

    /// Emit a Renderable node, consuming the builder.
    pub fn render(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write_to(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::javascript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::new(Indent::Spaces(4));
        builder
            .push_line("function f() {")
            .push_indent()
            .push_line("return;")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "function f() {\n    return;\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::javascript();
        builder
            .push_indent()
            .push_line("a();")
            .push_blank()
            .push_line("b();");

        assert_eq!(builder.build(), "  a();\n\n  b();\n");
    }

    #[test]
    fn test_single_line_jsdoc() {
        let mut builder = CodeBuilder::javascript();
        builder.push_jsdoc("Find all instances").push_line("find: {},");

        assert_eq!(builder.build(), "/** Find all instances */\nfind: {},\n");
    }

    #[test]
    fn test_multi_line_jsdoc() {
        let mut builder = CodeBuilder::javascript();
        builder
            .push_indent()
            .push_jsdoc("Login a user\n\n@param credentials");

        assert_eq!(
            builder.build(),
            "  /**\n   * Login a user\n   *\n   * @param credentials\n   */\n"
        );
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::javascript();
        builder.push_dedent().push_dedent().push_line("x();");

        assert_eq!(builder.build(), "x();\n");
    }

    #[test]
    fn test_render_fragments() {
        let fragments = vec![
            CodeFragment::block(
                "var R = {",
                vec![CodeFragment::line("a: 1,"), CodeFragment::Blank],
                Some("};".to_string()),
            ),
            CodeFragment::Indent(vec![CodeFragment::JsDoc("doc".into())]),
            CodeFragment::Sequence(vec![CodeFragment::Raw("x".into())]),
        ];

        let code = CodeBuilder::javascript().render(&fragments).build();

        assert_eq!(code, "var R = {\n  a: 1,\n\n};\n  /** doc */\nx");
    }
}
