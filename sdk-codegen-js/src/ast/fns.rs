//! Function declaration builder.

use sirasdk_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

/// A parameter of a function declaration.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Option<String>,
    pub optional: bool,
    pub default: Option<String>,
}

impl Param {
    /// An untyped parameter (plain JavaScript).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            optional: false,
            default: None,
        }
    }

    /// A typed parameter (TypeScript).
    pub fn typed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            ty: Some(ty.into()),
            ..Self::new(name)
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Give the parameter a default value expression.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn render(&self) -> String {
        let optional = if self.optional { "?" } else { "" };
        let ty = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        let default = match &self.default {
            Some(value) => format!(" = {}", value),
            None => String::new(),
        };
        format!("{}{}{}{}", self.name, optional, ty, default)
    }
}

/// Builder for function declarations.
#[derive(Debug, Clone)]
pub struct Fn {
    name: String,
    doc: Option<String>,
    exported: bool,
    is_async: bool,
    params: Vec<Param>,
    return_type: Option<String>,
    body: Vec<String>,
}

impl Fn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            exported: true,
            is_async: false,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    /// Add a line to the function body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: impl Into<String>) -> Self {
        for line in content.into().lines() {
            self.body.push(line.to_string());
        }
        self
    }

    /// Build the function as a string.
    pub fn build(&self) -> String {
        CodeBuilder::javascript().render(self).build()
    }

    fn format_signature(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let async_kw = if self.is_async { "async " } else { "" };

        let params_str = self
            .params
            .iter()
            .map(Param::render)
            .collect::<Vec<_>>()
            .join(", ");

        match &self.return_type {
            Some(ret) => format!(
                "{}{}function {}({}): {} {{",
                export, async_kw, self.name, params_str, ret
            ),
            None => format!(
                "{}{}function {}({}) {{",
                export, async_kw, self.name, params_str
            ),
        }
    }
}

impl Renderable for Fn {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();

        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        // Blank body lines stay blank instead of carrying indentation.
        let body: Vec<CodeFragment> = self
            .body
            .iter()
            .map(|line| {
                if line.trim().is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.clone())
                }
            })
            .collect();

        fragments.push(CodeFragment::Block {
            header: self.format_signature(),
            body,
            close: Some("}".to_string()),
        });

        fragments
    }
}
