//! Registry documents: the JSON form of an application's REST metadata.
//!
//! Parsing is two-step. The document is first deserialized into raw
//! shapes that mirror the JSON, then lowered into IR records. Shape
//! validation happens during lowering so the describer never has to
//! check for missing fields.

use std::str::FromStr;

use serde::Deserialize;
use sirasdk_ir::{HttpRoute, ParamDescriptor, RestClass, RestMethod, SharedCtor, SharedMethod};

use crate::{RegistryError, RestRegistry, Result, error::SourceContext};

/// HTTP verbs a route may declare (`del` is accepted as an alias of `delete`).
const KNOWN_VERBS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD", "OPTIONS"];

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    settings: RawSettings,
    #[serde(default)]
    classes: Vec<RawClass>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSettings {
    resultful: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawClass {
    name: String,
    #[serde(default)]
    http: Option<RawClassHttp>,
    #[serde(default)]
    ctor: Option<RawCtor>,
    #[serde(default)]
    methods: Vec<RawMethod>,
}

#[derive(Debug, Deserialize)]
struct RawClassHttp {
    path: String,
}

#[derive(Debug, Deserialize)]
struct RawCtor {
    #[serde(default)]
    accepts: Vec<ParamDescriptor>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMethod {
    name: String,
    #[serde(default)]
    is_static: bool,
    #[serde(default)]
    accepts: Vec<ParamDescriptor>,
    #[serde(default)]
    returns: Vec<ParamDescriptor>,
    #[serde(default)]
    http: Option<OneOrMany<RawRoute>>,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    rest_class: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default = "default_verb")]
    verb: String,
    #[serde(default)]
    path: Option<String>,
}

fn default_verb() -> String {
    "post".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

/// A parsed and validated registry document.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryDocument {
    classes: Vec<RestClass>,
    resultful: Option<bool>,
}

impl RegistryDocument {
    /// Parse a document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }

    /// The lowered classes, in document order.
    pub fn classes(&self) -> &[RestClass] {
        &self.classes
    }
}

impl FromStr for RegistryDocument {
    type Err = Box<RegistryError>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "registry.json")
    }
}

impl RestRegistry for RegistryDocument {
    fn build_classes(&self) -> Result<Vec<RestClass>> {
        Ok(self.classes.clone())
    }

    fn resultful(&self) -> Option<bool> {
        self.resultful
    }
}

/// Parse a registry document from content with the given filename for error reporting.
pub fn parse_document(content: &str, filename: &str) -> Result<RegistryDocument> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawDocument =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let classes = raw
        .classes
        .into_iter()
        .enumerate()
        .map(|(index, class)| lower_class(&source_ctx, index, class))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        file = filename,
        classes = classes.len(),
        "Loaded registry document"
    );

    Ok(RegistryDocument {
        classes,
        resultful: raw.settings.resultful,
    })
}

fn lower_class(ctx: &SourceContext, index: usize, raw: RawClass) -> Result<RestClass> {
    if raw.name.trim().is_empty() {
        return Err(ctx.validation_error(format!("class #{} has an empty name", index), None));
    }

    let location = format!("classes.{}", raw.name);
    let ctor = match raw.ctor {
        Some(ctor) => {
            validate_params(ctx, &format!("{}.ctor", location), &ctor.accepts)?;
            Some(SharedCtor::new(ctor.accepts))
        }
        None => None,
    };
    let http_path = raw
        .http
        .map(|h| h.path)
        .unwrap_or_else(|| format!("/{}", raw.name));

    let methods = raw
        .methods
        .into_iter()
        .map(|method| lower_method(ctx, &raw.name, &location, method))
        .collect::<Result<Vec<_>>>()?;

    Ok(RestClass {
        name: raw.name,
        ctor,
        http_path,
        methods,
    })
}

fn lower_method(
    ctx: &SourceContext,
    class_name: &str,
    class_location: &str,
    raw: RawMethod,
) -> Result<RestMethod> {
    if raw.name.trim().is_empty() {
        return Err(ctx.validation_error(
            format!("{} has a method with an empty name", class_location),
            Some(class_name),
        ));
    }

    let location = format!("{}.methods.{}", class_location, raw.name);
    validate_params(ctx, &format!("{}.accepts", location), &raw.accepts)?;
    validate_params(ctx, &format!("{}.returns", location), &raw.returns)?;

    let routes = match raw.http {
        Some(http) => http
            .into_vec()
            .into_iter()
            .map(|route| lower_route(ctx, &location, &raw.name, route))
            .collect::<Result<Vec<_>>>()?,
        None => vec![HttpRoute::new("POST", format!("/{}", raw.name))],
    };

    Ok(RestMethod {
        name: raw.name.clone(),
        accepts: raw.accepts,
        routes,
        rest_class: raw.rest_class.unwrap_or_else(|| class_name.to_string()),
        shared_method: SharedMethod {
            name: raw.name,
            is_static: raw.is_static,
            aliases: raw.aliases,
            description: raw.description,
            returns: raw.returns,
        },
    })
}

fn lower_route(
    ctx: &SourceContext,
    location: &str,
    method_name: &str,
    raw: RawRoute,
) -> Result<HttpRoute> {
    let verb = match raw.verb.to_ascii_uppercase().as_str() {
        "DEL" => "DELETE".to_string(),
        v if KNOWN_VERBS.contains(&v) => v.to_string(),
        _ => {
            return Err(ctx.validation_error(
                format!("{} uses unknown HTTP verb '{}'", location, raw.verb),
                Some(&raw.verb),
            ));
        }
    };
    let path = raw.path.unwrap_or_else(|| format!("/{}", method_name));
    Ok(HttpRoute::new(verb, path))
}

fn validate_params(ctx: &SourceContext, location: &str, params: &[ParamDescriptor]) -> Result<()> {
    for (i, param) in params.iter().enumerate() {
        if param.arg.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("{} has a parameter #{} with an empty name", location, i),
                None,
            ));
        }
    }
    Ok(())
}
