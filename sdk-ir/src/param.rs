//! Parameter descriptors.

use serde::{Deserialize, Serialize};

/// Where an HTTP request carries a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamSource {
    Path,
    Query,
    Body,
    Form,
    Header,
    Req,
    Res,
    Context,
}

impl ParamSource {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamSource::Path => "path",
            ParamSource::Query => "query",
            ParamSource::Body => "body",
            ParamSource::Form => "form",
            ParamSource::Header => "header",
            ParamSource::Req => "req",
            ParamSource::Res => "res",
            ParamSource::Context => "context",
        }
    }

    /// Returns true for sources filled by the server rather than the caller.
    pub fn is_server_side(&self) -> bool {
        matches!(
            self,
            ParamSource::Req | ParamSource::Res | ParamSource::Context
        )
    }
}

/// HTTP mapping of a parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamHttp {
    pub source: ParamSource,
}

/// One entry of an `accepts` or `returns` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDescriptor {
    /// Parameter name.
    pub arg: String,
    /// Registry type string (e.g. "string", "object", "[string]").
    #[serde(rename = "type", default = "default_type")]
    pub ty: String,
    /// Whether the caller must supply the parameter.
    #[serde(default)]
    pub required: bool,
    /// Description for generated docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// HTTP mapping, when the registry declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<ParamHttp>,
    /// For return descriptors: the value is the whole response body.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub root: bool,
}

fn default_type() -> String {
    "any".to_string()
}

impl ParamDescriptor {
    /// Create an optional parameter of type `any` with no HTTP mapping.
    pub fn new(arg: impl Into<String>) -> Self {
        Self {
            arg: arg.into(),
            ty: default_type(),
            required: false,
            description: None,
            http: None,
            root: false,
        }
    }

    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn source(mut self, source: ParamSource) -> Self {
        self.http = Some(ParamHttp { source });
        self
    }

    pub fn root(mut self) -> Self {
        self.root = true;
        self
    }

    /// The declared HTTP source, if any.
    pub fn http_source(&self) -> Option<ParamSource> {
        self.http.as_ref().map(|h| h.source)
    }

    /// Returns true for `"array"` and bracketed types like `"[string]"`.
    pub fn is_array(&self) -> bool {
        self.ty.eq_ignore_ascii_case("array") || (self.ty.starts_with('[') && self.ty.ends_with(']'))
    }
}
