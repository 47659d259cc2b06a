//! JavaScript object literal builder.

use sirasdk_codegen::builder::{CodeBuilder, CodeFragment, Renderable};
use sirasdk_core::js_string;

/// A property in a JavaScript object literal.
#[derive(Debug, Clone)]
pub struct Property {
    pub key: String,
    pub value: PropertyValue,
}

/// The value of an object property.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// A literal string value (will be quoted).
    String(String),
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A nested object.
    Object(JsObject),
    /// A function expression.
    Fn(FnExpr),
}

impl Property {
    /// Create a property with a string value (will be quoted).
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::String(value.into()),
        }
    }

    /// Create a property with a raw expression value (will not be quoted).
    pub fn raw(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Raw(value.into()),
        }
    }

    /// Create a property with a nested object value.
    pub fn object(key: impl Into<String>, value: JsObject) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Object(value),
        }
    }

    /// Create a property with a function value.
    pub fn function(key: impl Into<String>, value: FnExpr) -> Self {
        Self {
            key: key.into(),
            value: PropertyValue::Fn(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FnStyle {
    /// `function(params) { ... }`
    Keyword,
    /// `(params) => { ... }`
    Arrow,
}

/// A function expression for use as a property value.
#[derive(Debug, Clone)]
pub struct FnExpr {
    style: FnStyle,
    pub params: String,
    pub is_async: bool,
    pub return_type: Option<String>,
    pub body: Vec<String>,
}

impl FnExpr {
    /// An ES5 `function(params) { ... }` expression.
    pub fn function(params: impl Into<String>) -> Self {
        Self::new(FnStyle::Keyword, params)
    }

    /// An arrow function `(params) => { ... }`.
    pub fn arrow(params: impl Into<String>) -> Self {
        Self::new(FnStyle::Arrow, params)
    }

    fn new(style: FnStyle, params: impl Into<String>) -> Self {
        Self {
            style,
            params: params.into(),
            is_async: false,
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    /// Add a return type annotation (TypeScript only).
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn body_lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for line in lines {
            self.body.push(line.into());
        }
        self
    }

    /// The opening line up to and including `{`.
    fn head(&self) -> String {
        let async_kw = if self.is_async { "async " } else { "" };
        let ret = match &self.return_type {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        match self.style {
            FnStyle::Keyword => format!("{}function({}){} {{", async_kw, self.params, ret),
            FnStyle::Arrow => format!("{}({}){} => {{", async_kw, self.params, ret),
        }
    }

    fn body_fragments(&self) -> Vec<CodeFragment> {
        self.body
            .iter()
            .map(|line| CodeFragment::Line(line.clone()))
            .collect()
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::string(key, value));
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::raw(key, value));
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property::object(key, value));
        self
    }

    /// Add a function property.
    pub fn function(mut self, key: impl Into<String>, value: FnExpr) -> Self {
        self.properties.push(Property::function(key, value));
        self
    }

    /// Add an already built property.
    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Conditionally add a raw property.
    pub fn raw_if(self, condition: bool, key: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.raw(key, value)
        } else {
            self
        }
    }

    /// Conditionally add a nested object property.
    pub fn object_if(self, condition: bool, key: impl Into<String>, value: JsObject) -> Self {
        if condition {
            self.object(key, value)
        } else {
            self
        }
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the object on a single line, e.g. `{ "id": "@id" }`.
    ///
    /// Only string and raw properties are supported inline; nested values
    /// are rendered multi-line by [`JsObject::build`].
    pub fn build_inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let props = self
            .properties
            .iter()
            .filter_map(|prop| match &prop.value {
                PropertyValue::String(s) => Some(format!("{}: {}", prop.key, js_string(s))),
                PropertyValue::Raw(s) => Some(format!("{}: {}", prop.key, s)),
                PropertyValue::Object(obj) => Some(format!("{}: {}", prop.key, obj.build_inline())),
                PropertyValue::Fn(_) => None,
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {} }}", props)
    }

    /// Build the object as a string.
    pub fn build(&self) -> String {
        CodeBuilder::javascript().render(self).build()
    }

    /// Convert properties to code fragments.
    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|prop| match &prop.value {
                PropertyValue::String(s) => {
                    CodeFragment::Line(format!("{}: {},", prop.key, js_string(s)))
                }
                PropertyValue::Raw(s) => CodeFragment::Line(format!("{}: {},", prop.key, s)),
                PropertyValue::Object(obj) => CodeFragment::Block {
                    header: format!("{}: {{", prop.key),
                    body: obj.properties_to_fragments(),
                    close: Some("},".to_string()),
                },
                PropertyValue::Fn(func) => CodeFragment::Block {
                    header: format!("{}: {}", prop.key, func.head()),
                    body: func.body_fragments(),
                    close: Some("},".to_string()),
                },
            })
            .collect()
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.properties.is_empty() {
            return vec![CodeFragment::Line("{}".to_string())];
        }

        vec![CodeFragment::Block {
            header: "{".to_string(),
            body: self.properties_to_fragments(),
            close: Some("}".to_string()),
        }]
    }
}
