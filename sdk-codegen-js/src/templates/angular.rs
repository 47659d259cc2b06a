//! AngularJS `$resource` services.
//!
//! Renders one IIFE that registers an AngularJS module depending on
//! `ngResource`, one factory per model, the `SiraAuth` session store with
//! its request interceptor, and the `<Module>Resource` provider every
//! factory is built on.

use sirasdk_codegen::{
    RenderError, Template, TemplateContext,
    builder::{CodeBuilder, Renderable},
};
use sirasdk_core::{capitalize_first, js_string};
use sirasdk_ir::{ModelDescription, RestMethod};

use super::keys::{MethodKeys, client_keys};
use super::routes::{action_path, ctor_path_params, join_path, resource_path, route_of};
use crate::{
    JS_NAMING,
    ast::{Fn, FnExpr, JsObject, Param},
    code_file::RawCode,
};

/// Session store and the interceptor that sends the access token.
const AUTH_SERVICES: &str = r#"module
  .factory('SiraAuth', function() {
    var props = ['accessTokenId', 'currentUserId', 'rememberMe'];
    var propsPrefix = '$Sira$';

    function SiraAuth() {
      var self = this;
      props.forEach(function(name) {
        self[name] = load(name);
      });
      this.currentUserData = null;
    }

    SiraAuth.prototype.save = function() {
      var self = this;
      var storage = this.rememberMe ? localStorage : sessionStorage;
      props.forEach(function(name) {
        save(storage, name, self[name]);
      });
    };

    SiraAuth.prototype.setUser = function(accessTokenId, userId, userData) {
      this.accessTokenId = accessTokenId;
      this.currentUserId = userId;
      this.currentUserData = userData;
    };

    SiraAuth.prototype.clearUser = function() {
      this.accessTokenId = null;
      this.currentUserId = null;
      this.currentUserData = null;
    };

    SiraAuth.prototype.clearStorage = function() {
      props.forEach(function(name) {
        save(sessionStorage, name, null);
        save(localStorage, name, null);
      });
    };

    return new SiraAuth();

    // Storage converts values to strings; an empty string stands for null.
    function save(storage, name, value) {
      var key = propsPrefix + name;
      if (value == null) value = '';
      storage[key] = value;
    }

    function load(name) {
      var key = propsPrefix + name;
      return localStorage[key] || sessionStorage[key] || null;
    }
  })
  .config(['$httpProvider', function($httpProvider) {
    $httpProvider.interceptors.push('SiraAuthRequestInterceptor');
  }])
  .factory('SiraAuthRequestInterceptor', ['$q', 'SiraAuth',
    function($q, SiraAuth) {
      return {
        'request': function(config) {
          if (SiraAuth.accessTokenId) {
            config.headers[authHeader] = SiraAuth.accessTokenId;
          } else if (config.__isGetCurrentUser__) {
            // Stub 401 for the current user request while nobody is logged in
            var res = {
              body: { error: { status: 401 } },
              status: 401,
              config: config,
              headers: function() { return undefined; }
            };
            return $q.reject(res);
          }
          return config || $q.when(config);
        }
      };
    }]);"#;

/// Body of the `<Module>Resource` provider.
const RESOURCE_PROVIDER: &str = r#"/**
 * Change the header name that is used for sending the authentication token.
 */
this.setAuthHeader = function(header) {
  authHeader = header;
};

/**
 * Change the URL of the REST API server.
 */
this.setUrlBase = function(url) {
  urlBase = url;
};

this.$get = ['$resource', function($resource) {
  return function(url, params, actions) {
    var resource = $resource(url, params, actions);

    // $save() always POSTs; route it through upsert when the model has one
    if (resource.upsert) {
      resource.prototype.$save = function(success, error) {
        var result = resource.upsert.call(this, {}, this, success, error);
        return result.$promise || result;
      };
    }
    return resource;
  };
}];"#;

/// Session helpers added to the user model only.
const USER_HELPERS: &str = r#"R.getCachedCurrent = function() {
  var data = SiraAuth.currentUserData;
  return data ? new R(data) : null;
};

R.isAuthenticated = function() {
  return this.getCurrentId() != null;
};

R.getCurrentId = function() {
  return SiraAuth.currentUserId;
};"#;

/// AngularJS template (the default).
pub struct AngularTemplate;

impl Template for AngularTemplate {
    fn name(&self) -> &'static str {
        "angular"
    }

    fn description(&self) -> &'static str {
        "AngularJS module with one $resource service per model"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn render(&self, ctx: &TemplateContext<'_>) -> Result<String, RenderError> {
        ctx.validate()?;
        let models = ctx.model_identifiers(|name| JS_NAMING.binding_name(name))?;
        let resource = resource_service_name(ctx.module_name);

        let mut b = CodeBuilder::javascript();
        b.push_line("(function(window, angular, undefined) {")
            .push_indent()
            .push_line("'use strict';")
            .push_blank()
            .push_line(&format!("var urlBase = {};", js_string(ctx.url_base)))
            .push_line("var authHeader = 'authorization';")
            .push_blank()
            .push_jsdoc(&format!(
                "@ngdoc overview\n@name {name}\n@module {name}\n@description\n\n\
                 The `{name}` module provides services for interacting with\n\
                 the models exposed by the Sira server via the REST API.",
                name = ctx.module_name
            ))
            .push_line(&format!(
                "var module = angular.module({}, ['ngResource']);",
                js_string(ctx.module_name)
            ));

        if ctx.is_resultful() {
            b.push_blank().emit(&unwrap_result_fn());
        }

        for (binding, model) in &models {
            tracing::debug!(model = model.name(), binding = %binding, "Rendering angular factory");
            b.push_blank();
            write_factory(&mut b, ctx, binding, model, &resource)?;
        }

        b.push_blank()
            .emit(&RawCode::new(AUTH_SERVICES))
            .push_blank()
            .push_line(&format!("module.provider({}, function() {{", js_string(&resource)))
            .push_indent()
            .emit(&RawCode::new(RESOURCE_PROVIDER))
            .push_dedent()
            .push_line("});")
            .push_dedent()
            .push_line("})(window, window.angular);");

        Ok(b.build())
    }
}

/// Name of the `$resource` wrapper service, e.g. "SirasResource".
fn resource_service_name(module_name: &str) -> String {
    format!("{}Resource", capitalize_first(module_name))
}

fn unwrap_result_fn() -> impl Renderable {
    Fn::new("unwrapResult")
        .private()
        .doc("Unwrap the `{ result: ... }` envelope of resultful responses.")
        .param(Param::new("data"))
        .body_line("var json = data ? angular.fromJson(data) : data;")
        .body_line("return json && json.result !== undefined ? json.result : json;")
}

fn write_factory(
    b: &mut CodeBuilder,
    ctx: &TemplateContext<'_>,
    binding: &str,
    model: &ModelDescription,
    resource: &str,
) -> Result<(), RenderError> {
    let keys = client_keys(model, &reserved_keys(model))?;
    let actions = model_actions(ctx, model, &keys)?;

    let mut params = JsObject::new();
    for param in ctor_path_params(model) {
        params = params.string(js_string(&param.arg), format!("@{}", param.arg));
    }

    b.push_jsdoc(&format!(
        "@ngdoc object\n@name {module}.{binding}\n@header {module}.{binding}\n\n\
         @description\n\n\
         A $resource object for interacting with the `{name}` model.",
        module = ctx.module_name,
        binding = binding,
        name = model.name()
    ))
    .push_line(&format!("module.factory({}, [", js_string(binding)))
    .push_indent()
    .push_line(&format!("{}, 'SiraAuth',", js_string(resource)))
    .push_line("function(Resource, SiraAuth) {")
    .push_indent()
    .push_line("var R = Resource(")
    .push_indent()
    .push_line(&format!("urlBase + {},", js_string(&resource_path(model))))
    .push_line(&format!("{},", params.build_inline()))
    .emit(&actions)
    .push_dedent()
    .push_line(");");

    let aliases: Vec<(&str, &str)> = keys
        .iter()
        .flat_map(|k| k.aliases.iter().map(move |alias| (*alias, k.action.as_str())))
        .collect();
    if !aliases.is_empty() {
        b.push_blank();
        for (alias, action) in aliases {
            b.push_line(&format!(
                "R[{}] = R[{}];",
                js_string(alias),
                js_string(action)
            ));
        }
    }

    if model.is_user {
        b.push_blank().emit(&RawCode::new(USER_HELPERS));
    }

    b.push_blank()
        .push_line(&format!("R.modelName = {};", js_string(model.name())))
        .push_blank()
        .push_line("return R;")
        .push_dedent()
        .push_line("}")
        .push_dedent()
        .push_line("]);");

    Ok(())
}

/// Keys the factory sets on `R` besides the method actions.
fn reserved_keys(model: &ModelDescription) -> Vec<&'static str> {
    let mut reserved = vec!["modelName"];
    if model.is_user {
        reserved.extend(["getCachedCurrent", "isAuthenticated", "getCurrentId"]);
        if !has_static_method(model.methods(), "getCurrent") {
            reserved.push("getCurrent");
        }
    }
    reserved
}

/// The `$resource` actions of one model, keyed by action name.
fn model_actions(
    ctx: &TemplateContext<'_>,
    model: &ModelDescription,
    keys: &[MethodKeys<'_>],
) -> Result<JsObject, RenderError> {
    let mut actions = JsObject::new();

    for key in keys {
        let method = key.method;
        let route = route_of(model, method)?;
        let mut action = JsObject::new();

        if model.is_user && method.is_static() {
            action = match method.name.as_str() {
                "login" => with_login_interceptor(action),
                "logout" => with_logout_interceptor(action),
                _ => action,
            };
        }

        action = action
            .raw(
                "url",
                format!("urlBase + {}", js_string(&action_path(model, method, route))),
            )
            .string("method", &route.verb)
            .raw_if(method.is_returning_array(), "isArray", "true")
            .raw_if(ctx.is_resultful(), "transformResponse", "unwrapResult");

        actions = actions.object(js_string(&key.action), action);
    }

    if model.is_user && !has_static_method(model.methods(), "getCurrent") {
        actions = actions.object(js_string("getCurrent"), get_current_action(ctx, model));
    }

    Ok(actions)
}

fn has_static_method(methods: &[RestMethod], name: &str) -> bool {
    methods.iter().any(|m| m.is_static() && m.name == name)
}

fn with_login_interceptor(action: JsObject) -> JsObject {
    let response = FnExpr::function("response").body_lines([
        "var accessToken = response.data;",
        "SiraAuth.setUser(accessToken.id, accessToken.userId, accessToken.user);",
        "SiraAuth.rememberMe = response.config.params.rememberMe !== false;",
        "SiraAuth.save();",
        "return response.resource;",
    ]);
    action
        .object("params", JsObject::new().string("include", "user"))
        .object("interceptor", JsObject::new().function("response", response))
}

fn with_logout_interceptor(action: JsObject) -> JsObject {
    let response = FnExpr::function("response").body_lines([
        "SiraAuth.clearUser();",
        "SiraAuth.clearStorage();",
        "return response.resource;",
    ]);
    action.object("interceptor", JsObject::new().function("response", response))
}

/// `getCurrent` fetches the logged in user; the interceptor stubs a 401
/// when there is no session.
fn get_current_action(ctx: &TemplateContext<'_>, model: &ModelDescription) -> JsObject {
    let id = FnExpr::function("").body_lines([
        "var id = SiraAuth.currentUserId;",
        "if (id == null) id = '__anonymous__';",
        "return id;",
    ]);
    let response = FnExpr::function("response").body_lines([
        "SiraAuth.currentUserData = response.data;",
        "return response.resource;",
    ]);
    JsObject::new()
        .raw(
            "url",
            format!("urlBase + {}", js_string(&join_path([model.http_path(), ":id"]))),
        )
        .string("method", "GET")
        .object("params", JsObject::new().function("id", id))
        .object("interceptor", JsObject::new().function("response", response))
        .raw("__isGetCurrentUser__", "true")
        .raw_if(ctx.is_resultful(), "transformResponse", "unwrapResult")
}

#[cfg(test)]
mod tests {
    use sirasdk_ir::{ModelDescriptions, ParamDescriptor, ParamSource};
    use sirasdk_registry::{ClassBuilder, MethodBuilder};

    use super::*;

    fn models(classes: Vec<sirasdk_ir::RestClass>) -> ModelDescriptions {
        let mut models = ModelDescriptions::new();
        for class in classes {
            models.insert(ModelDescription::new(class));
        }
        models
    }

    fn product() -> sirasdk_ir::RestClass {
        ClassBuilder::model("product")
            .http_path("/products")
            .ctor_param(ParamDescriptor::new("id").source(ParamSource::Path))
            .method(
                MethodBuilder::static_method("find")
                    .route("get", "/")
                    .returns(ParamDescriptor::new("data").ty("[product]").root())
                    .alias("all"),
            )
            .method(MethodBuilder::prototype("updateAttributes").route("put", "/"))
            .build()
    }

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_service_name("siras"), "SirasResource");
    }

    #[test]
    fn test_actions_of_a_model() {
        let models = models(vec![product()]);
        let ctx = TemplateContext::new("siras", &models, "");
        let model = models.get("product").unwrap();

        let keys = client_keys(model, &reserved_keys(model)).unwrap();
        let actions = model_actions(&ctx, model, &keys).unwrap().build();

        insta::assert_snapshot!(actions, @r#"
        {
          "find": {
            url: urlBase + "/products",
            method: "GET",
            isArray: true,
          },
          "prototype$updateAttributes": {
            url: urlBase + "/products/:id",
            method: "PUT",
          },
        }
        "#);
    }

    #[test]
    fn test_factory_wiring() {
        let models = models(vec![product()]);
        let source = AngularTemplate
            .render(&TemplateContext::new("shop", &models, "http://localhost/api"))
            .unwrap();

        assert!(source.contains("var urlBase = \"http://localhost/api\";"));
        assert!(source.contains("var module = angular.module(\"shop\", ['ngResource']);"));
        assert!(source.contains("module.factory(\"Product\", ["));
        assert!(source.contains("\"ShopResource\", 'SiraAuth',"));
        assert!(source.contains("urlBase + \"/products/:id\",\n        { \"id\": \"@id\" },"));
        assert!(source.contains("R[\"all\"] = R[\"find\"];"));
        assert!(source.contains("R.modelName = \"product\";"));
        assert!(source.contains("module.provider(\"ShopResource\", function() {"));
        assert!(source.ends_with("})(window, window.angular);\n"));
        assert!(!source.contains("unwrapResult"));
        assert!(!source.contains("getCurrent"));
    }

    #[test]
    fn test_user_model_gets_session_helpers() {
        let user = ClassBuilder::model("User")
            .ctor_param(ParamDescriptor::new("id").source(ParamSource::Path))
            .method(MethodBuilder::static_method("login").route("post", "/login"))
            .method(MethodBuilder::static_method("logout").route("post", "/logout"))
            .build();
        let models = models(vec![user, product()]);

        let source = AngularTemplate
            .render(&TemplateContext::new("siras", &models, ""))
            .unwrap();

        assert!(source.contains("SiraAuth.setUser(accessToken.id, accessToken.userId, accessToken.user);"));
        assert!(source.contains("include: \"user\","));
        assert!(source.contains("SiraAuth.clearStorage();"));
        assert!(source.contains("\"getCurrent\": {"));
        assert!(source.contains("url: urlBase + \"/User/:id\","));
        assert!(source.contains("__isGetCurrentUser__: true,"));
        assert_eq!(source.matches("R.getCachedCurrent = function() {").count(), 1);
        assert_eq!(source.matches("R.getCurrentId = function() {").count(), 1);
    }

    #[test]
    fn test_resultful_adds_transform() {
        let models = models(vec![product()]);
        let ctx = TemplateContext::new("siras", &models, "").with_resultful(Some(true));

        let source = AngularTemplate.render(&ctx).unwrap();

        assert!(source.contains("function unwrapResult(data) {"));
        assert_eq!(source.matches("transformResponse: unwrapResult,").count(), 2);
    }

    #[test]
    fn test_alias_never_overwrites_an_action() {
        let models = models(vec![
            ClassBuilder::model("Product")
                .method(
                    MethodBuilder::static_method("findAll")
                        .route("get", "/all")
                        .alias("find"),
                )
                .method(MethodBuilder::static_method("find").route("get", "/"))
                .build(),
        ]);

        let source = AngularTemplate
            .render(&TemplateContext::new("siras", &models, ""))
            .unwrap();

        assert!(source.contains("\"find\": {"));
        assert!(!source.contains("R[\"find\"] = R[\"findAll\"];"));
    }

    #[test]
    fn test_identifier_conflict() {
        let models = models(vec![
            ClassBuilder::model("product").build(),
            ClassBuilder::model("Product").build(),
        ]);

        let err = AngularTemplate
            .render(&TemplateContext::new("siras", &models, ""))
            .unwrap_err();

        assert!(matches!(err, RenderError::IdentifierConflict { .. }));
    }
}
