//! Dependency-free TypeScript client built on `fetch()`.

use indexmap::IndexMap;
use sirasdk_codegen::{RenderError, Template, TemplateContext};
use sirasdk_core::{js_string, to_pascal_case};
use sirasdk_ir::{ModelDescription, ParamDescriptor, ParamSource, RestMethod};

use super::keys::client_keys;
use super::routes::{action_path, ctor_path_params, route_of};
use crate::{
    JS_NAMING,
    ast::{Const, Fn, FnExpr, JsObject, Param},
    code_file::{CodeFile, RawCode},
    naming::to_js_identifier,
    type_mapper::map_param_type,
};

const REQUEST_OPTIONS: &str = r#"interface RequestOptions {
  path?: Record<string, unknown>;
  query?: Record<string, unknown>;
  headers?: Record<string, unknown>;
  body?: unknown;
}"#;

const REQUEST_BODY: &str = r#"const pathParams = options.path ?? {};
let url = urlBase + path.replace(/:(\w+)/g, (_: string, name: string) => encodeURIComponent(String(pathParams[name])));

const query = new URLSearchParams();
for (const [key, value] of Object.entries(options.query ?? {})) {
  if (value === undefined || value === null) continue;
  query.append(key, typeof value === "object" ? JSON.stringify(value) : String(value));
}
const search = query.toString();
if (search) url += "?" + search;

const headers: Record<string, string> = { Accept: "application/json" };
for (const [key, value] of Object.entries(options.headers ?? {})) {
  if (value !== undefined && value !== null) headers[key] = String(value);
}
if (accessToken) headers[authHeader] = accessToken;

let body: string | undefined;
if (options.body !== undefined) {
  headers["Content-Type"] = "application/json";
  body = JSON.stringify(options.body);
}

const response = await fetch(url, { method, headers, body });
if (!response.ok) {
  throw new Error(`${method} ${url} failed with status ${response.status}`);
}
const text = await response.text();
const data = text ? JSON.parse(text) : null;"#;

/// TypeScript `fetch()` template.
pub struct FetchTemplate;

impl Template for FetchTemplate {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn description(&self) -> &'static str {
        "Dependency-free TypeScript client built on fetch()"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn render(&self, ctx: &TemplateContext<'_>) -> Result<String, RenderError> {
        ctx.validate()?;
        let models = ctx.model_identifiers(binding_name)?;

        let clients = models
            .iter()
            .map(|(binding, model)| model_client(binding, model))
            .collect::<Result<Vec<_>, _>>()?;

        let file = CodeFile::new()
            .add(Const::new("moduleName", js_string(ctx.module_name)))
            .add(Const::new("urlBase", js_string(ctx.url_base)))
            .add(RawCode::new(REQUEST_OPTIONS))
            .add(
                Const::new("authHeader", js_string("authorization"))
                    .private(),
            )
            .add(
                Const::new("session", "{ accessToken: null as string | null }")
                    .private(),
            )
            .add(
                Fn::new("setAccessToken")
                    .doc("Set the access token sent with every request.")
                    .param(Param::typed("token", "string | null"))
                    .returns("void")
                    .body_line("session.accessToken = token;"),
            )
            .add(request_fn(ctx.is_resultful()))
            .add_all(clients);

        Ok(file.render())
    }
}

/// Model names become PascalCase identifiers ("my-model" -> "MyModel").
fn binding_name(name: &str) -> String {
    JS_NAMING.safe_name(&to_js_identifier(&to_pascal_case(name)))
}

fn request_fn(resultful: bool) -> Fn {
    let ret = if resultful {
        "return data !== null && data.result !== undefined ? data.result : data;"
    } else {
        "return data;"
    };
    Fn::new("request")
        .private()
        .async_()
        .param(Param::typed("method", "string"))
        .param(Param::typed("path", "string"))
        .param(Param::typed("options", "RequestOptions").default_value("{}"))
        .returns("Promise<any>")
        .body("const accessToken = session.accessToken;")
        .body(REQUEST_BODY)
        .body_line(ret)
}

fn model_client(binding: &str, model: &ModelDescription) -> Result<Const, RenderError> {
    tracing::debug!(model = model.name(), binding = %binding, "Rendering fetch client");

    let mut client = JsObject::new().string("modelName", model.name());
    for key in client_keys(model, &["modelName"])? {
        let call = action_fn(model, key.method)?;
        client = client.function(property_key(&key.action), call.clone());
        for alias in &key.aliases {
            client = client.function(property_key(alias), call.clone());
        }
    }

    Ok(Const::object(binding, client).doc(format!("Client for the `{}` model.", model.name())))
}

/// Object keys that are not identifiers are quoted.
fn property_key(key: &str) -> String {
    if sirasdk_core::is_js_identifier(key) {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// One client-side argument of an action.
struct Arg<'m> {
    name: String,
    param: &'m ParamDescriptor,
    /// Unmapped constructor params are URL segments.
    in_path: bool,
}

impl Arg<'_> {
    fn source(&self) -> Option<ParamSource> {
        match self.param.http_source() {
            None if self.in_path => Some(ParamSource::Path),
            source => source,
        }
    }
}

fn action_fn(model: &ModelDescription, method: &RestMethod) -> Result<FnExpr, RenderError> {
    let route = route_of(model, method)?;
    let args = action_args(model, method)?;

    Ok(FnExpr::arrow(signature(&args))
        .async_()
        .returns("Promise<any>")
        .body_line(format!(
            "return request({}, {}, {});",
            js_string(&route.verb),
            js_string(&action_path(model, method, route)),
            request_options(&args)
        )))
}

/// Client-side arguments of an action, one per distinct `arg`.
///
/// The merged accepts list repeats constructor params a prototype method
/// also declares; the first occurrence is kept.
fn action_args<'m>(model: &ModelDescription, method: &'m RestMethod) -> Result<Vec<Arg<'m>>, RenderError> {
    let ctor_args: Vec<&str> = if method.is_static() {
        Vec::new()
    } else {
        ctor_path_params(model).iter().map(|p| p.arg.as_str()).collect()
    };

    let mut args: IndexMap<&str, Arg<'m>> = IndexMap::new();
    let mut names: IndexMap<String, &str> = IndexMap::new();
    for param in &method.accepts {
        if param.http_source().is_some_and(|s| s.is_server_side())
            || args.contains_key(param.arg.as_str())
        {
            continue;
        }
        let name = JS_NAMING.param_name(&param.arg);
        if let Some(first) = names.get(&name) {
            return Err(RenderError::IdentifierConflict {
                identifier: name,
                first: format!("{}.{}({})", model.name(), method.name, first),
                second: format!("{}.{}({})", model.name(), method.name, param.arg),
            });
        }
        names.insert(name.clone(), &param.arg);
        args.insert(
            &param.arg,
            Arg {
                name,
                param,
                in_path: ctor_args.contains(&param.arg.as_str()),
            },
        );
    }

    Ok(args.into_values().collect())
}

/// Parameter list; optional params only get `?` when nothing required follows.
fn signature(args: &[Arg<'_>]) -> String {
    let last_required = args.iter().rposition(|a| a.param.required);
    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            let ty = map_param_type(&arg.param.ty);
            match last_required {
                _ if arg.param.required => format!("{}: {}", arg.name, ty),
                Some(last) if i < last => format!("{}: {} | undefined", arg.name, ty),
                _ => format!("{}?: {}", arg.name, ty),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn request_options(args: &[Arg<'_>]) -> String {
    let mut path = JsObject::new();
    let mut query = JsObject::new();
    let mut headers = JsObject::new();
    let mut body: Vec<&Arg<'_>> = Vec::new();

    for arg in args {
        let key = js_string(&arg.param.arg);
        match arg.source() {
            Some(ParamSource::Path) => path = path.raw(key, &arg.name),
            Some(ParamSource::Header) => headers = headers.raw(key, &arg.name),
            Some(ParamSource::Body) | Some(ParamSource::Form) => body.push(arg),
            _ => query = query.raw(key, &arg.name),
        }
    }

    let body = match body.as_slice() {
        [] => None,
        [only] if only.source() == Some(ParamSource::Body) => Some(only.name.clone()),
        many => Some(
            many.iter()
                .fold(JsObject::new(), |obj, arg| {
                    obj.raw(js_string(&arg.param.arg), &arg.name)
                })
                .build_inline(),
        ),
    };

    let mut options = JsObject::new();
    if !path.is_empty() {
        options = options.object("path", path);
    }
    if !query.is_empty() {
        options = options.object("query", query);
    }
    if !headers.is_empty() {
        options = options.object("headers", headers);
    }
    if let Some(body) = body {
        options = options.raw("body", body);
    }
    options.build_inline()
}
