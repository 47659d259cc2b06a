//! URL helpers shared by the templates.

use sirasdk_codegen::RenderError;
use sirasdk_ir::{HttpRoute, ModelDescription, ParamDescriptor, ParamSource, RestMethod};

/// Constructor parameters that identify an instance in the URL.
///
/// Parameters without an HTTP mapping are treated as path parameters.
pub(crate) fn ctor_path_params(model: &ModelDescription) -> Vec<&ParamDescriptor> {
    model
        .ctor()
        .map(|ctor| {
            ctor.accepts
                .iter()
                .filter(|p| matches!(p.http_source(), None | Some(ParamSource::Path)))
                .collect()
        })
        .unwrap_or_default()
}

/// Join URL path pieces, collapsing duplicate and trailing slashes.
///
/// Always returns a path starting with `/`.
pub(crate) fn join_path<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let segments: Vec<&str> = parts
        .into_iter()
        .flat_map(|part| part.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect();
    format!("/{}", segments.join("/"))
}

fn ctor_segments(model: &ModelDescription) -> Vec<String> {
    ctor_path_params(model)
        .iter()
        .map(|p| format!(":{}", p.arg))
        .collect()
}

/// Path of the model's resource, including constructor parameters.
pub(crate) fn resource_path(model: &ModelDescription) -> String {
    let segments = ctor_segments(model);
    join_path(std::iter::once(model.http_path()).chain(segments.iter().map(String::as_str)))
}

/// Path of one method: prototype methods live under the instance path.
pub(crate) fn action_path(model: &ModelDescription, method: &RestMethod, route: &HttpRoute) -> String {
    let segments = if method.is_static() {
        Vec::new()
    } else {
        ctor_segments(model)
    };
    join_path(
        std::iter::once(model.http_path())
            .chain(segments.iter().map(String::as_str))
            .chain(std::iter::once(route.path.as_str())),
    )
}

/// The route a method is rendered with.
pub(crate) fn route_of<'m>(
    model: &ModelDescription,
    method: &'m RestMethod,
) -> Result<&'m HttpRoute, RenderError> {
    method.first_route().ok_or_else(|| RenderError::Malformed {
        model: model.name().to_string(),
        message: format!("method '{}' has no HTTP route", method.name),
    })
}
