//! Const declaration builder.

use sirasdk_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::JsObject;

#[derive(Debug, Clone)]
enum ConstValue {
    Expr(String),
    Object(JsObject),
}

/// Builder for `const` declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: ConstValue,
    ty: Option<String>,
    doc: Option<String>,
    exported: bool,
}

impl Const {
    /// A const bound to a single-line expression.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, ConstValue::Expr(value.into()))
    }

    /// A const bound to an object literal.
    pub fn object(name: impl Into<String>, value: JsObject) -> Self {
        Self::with_value(name, ConstValue::Object(value))
    }

    fn with_value(name: impl Into<String>, value: ConstValue) -> Self {
        Self {
            name: name.into(),
            value,
            ty: None,
            doc: None,
            exported: true,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Make this const private (not exported).
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Build the declaration as a string.
    pub fn build(&self) -> String {
        CodeBuilder::javascript().render(self).build()
    }

    fn lhs(&self) -> String {
        let export = if self.exported { "export " } else { "" };
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        format!("{}const {}{}", export, self.name, type_annotation)
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::JsDoc(doc.clone()));
        }

        match &self.value {
            ConstValue::Expr(value) => {
                fragments.push(CodeFragment::Line(format!("{} = {};", self.lhs(), value)));
            }
            ConstValue::Object(obj) if obj.is_empty() => {
                fragments.push(CodeFragment::Line(format!("{} = {{}};", self.lhs())));
            }
            ConstValue::Object(obj) => {
                // Reuse the object's body, opening on the declaration line.
                let body = match obj.to_fragments().into_iter().next() {
                    Some(CodeFragment::Block { body, .. }) => body,
                    _ => Vec::new(),
                };
                fragments.push(CodeFragment::block(
                    format!("{} = {{", self.lhs()),
                    body,
                    Some("};".to_string()),
                ));
            }
        }
        fragments
    }
}
