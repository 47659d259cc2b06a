//! End-to-end rendering of the built-in templates from registry documents.

use sirasdk_codegen::{GenerateError, GenerateOptions, Generated, RenderError, generate_services};
use sirasdk_codegen_js::builtin_templates;
use sirasdk_ir::{ParamDescriptor, ParamSource};
use sirasdk_registry::{ClassBuilder, MethodBuilder, RegistryDocument, StaticRegistry};

const DOCUMENT: &str = r#"{
  "classes": [
    {
      "name": "MyModel",
      "http": { "path": "/my-models" },
      "ctor": {
        "accepts": [
          { "arg": "id", "type": "any", "required": true, "http": { "source": "path" } }
        ]
      },
      "methods": [
        {
          "name": "find",
          "isStatic": true,
          "returns": [{ "arg": "data", "type": "[MyModel]", "root": true }],
          "http": { "verb": "get", "path": "/" },
          "aliases": ["all"]
        },
        {
          "name": "updateAttributes",
          "accepts": [
            { "arg": "data", "type": "object", "http": { "source": "body" } }
          ],
          "http": { "verb": "put", "path": "/" }
        }
      ]
    },
    {
      "name": "Helper",
      "methods": [{ "name": "ping", "isStatic": true }]
    },
    {
      "name": "lower-case-not-an-identifier",
      "ctor": { "accepts": [] },
      "methods": []
    }
  ]
}"#;

const USER_DOCUMENT: &str = r#"{
  "settings": { "resultful": true },
  "classes": [
    {
      "name": "User",
      "http": { "path": "/users" },
      "ctor": { "accepts": [{ "arg": "id", "required": true }] },
      "methods": [
        {
          "name": "login",
          "isStatic": true,
          "accepts": [{ "arg": "credentials", "type": "object", "http": { "source": "body" } }],
          "http": { "verb": "post", "path": "/login" }
        },
        {
          "name": "logout",
          "isStatic": true,
          "http": { "verb": "post", "path": "/logout" }
        }
      ]
    }
  ]
}"#;

fn generate(document: &str, options: GenerateOptions) -> Result<Generated, GenerateError> {
    let document: RegistryDocument = document.parse().expect("fixture should parse");
    generate_services(&document, &builtin_templates(), &options)
}

#[test]
fn angular_is_the_default_template() {
    let generated = generate(DOCUMENT, GenerateOptions::new()).unwrap();

    assert_eq!(generated.template, "angular");
    assert_eq!(generated.file_extension, "js");
    assert_eq!(generated.module_name, "siras");
    assert_eq!(generated.model_count, 2);
    assert!(generated.source.starts_with("(function(window, angular, undefined) {\n"));
    assert!(generated.source.contains("  var urlBase = \"\";\n"));
    assert!(generated.source.contains("var module = angular.module(\"siras\", ['ngResource']);"));
    assert!(generated.source.ends_with("})(window, window.angular);\n"));
}

#[test]
fn angular_factories_for_models_only() {
    let generated = generate(DOCUMENT, GenerateOptions::new()).unwrap();
    let source = &generated.source;

    assert!(source.contains("module.factory(\"MyModel\", ["));
    assert!(source.contains("urlBase + \"/my-models/:id\","));
    assert!(source.contains("\"prototype$updateAttributes\": {"));
    assert!(source.contains("url: urlBase + \"/my-models/:id\","));
    assert!(source.contains("R[\"all\"] = R[\"find\"];"));
    assert!(!source.contains("\"Helper\""));

    assert_eq!(generated.diagnostics.len(), 1);
    assert_eq!(generated.diagnostics[0].location.as_deref(), Some("Helper"));
}

#[test]
fn angular_keeps_names_that_are_not_identifiers() {
    let generated = generate(DOCUMENT, GenerateOptions::new()).unwrap();

    assert!(
        generated
            .source
            .contains("module.factory(\"Lower-case-not-an-identifier\", [")
    );
    assert!(
        generated
            .source
            .contains("R.modelName = \"lower-case-not-an-identifier\";")
    );
}

#[test]
fn angular_options_reach_the_output() {
    let options = GenerateOptions::new()
        .module_name("shop")
        .api_url("http://localhost:3000/api/");

    let generated = generate(DOCUMENT, options).unwrap();

    assert!(generated.source.contains("var urlBase = \"http://localhost:3000/api\";"));
    assert!(generated.source.contains("angular.module(\"shop\", ['ngResource'])"));
    assert!(generated.source.contains("module.provider(\"ShopResource\", function() {"));
    assert!(generated.source.contains("\"ShopResource\", 'SiraAuth',"));
}

#[test]
fn angular_user_model_gets_session_support() {
    let generated = generate(USER_DOCUMENT, GenerateOptions::new()).unwrap();
    let source = &generated.source;

    assert!(source.contains("function unwrapResult(data) {"));
    assert!(source.contains("transformResponse: unwrapResult,"));
    assert!(source.contains("include: \"user\","));
    assert!(source.contains("SiraAuth.clearUser();"));
    assert!(source.contains("__isGetCurrentUser__: true,"));
    assert!(source.contains("\"getCurrent\": {"));
    // Unmapped constructor params are path params
    assert!(source.contains("urlBase + \"/users/:id\","));
}

#[test]
fn fetch_template_renders_typescript() {
    let options = GenerateOptions::new()
        .template("fetch")
        .api_url("https://example.com/api");

    let generated = generate(DOCUMENT, options).unwrap();
    let source = &generated.source;

    assert_eq!(generated.file_extension, "ts");
    assert!(source.contains("export const urlBase = \"https://example.com/api\";"));
    assert!(source.contains("export const MyModel = {"));
    assert!(source.contains("export const LowerCaseNotAnIdentifier = {"));
    assert!(source.contains(
        "  find: async (): Promise<any> => {\n    return request(\"GET\", \"/my-models\", {});\n  },"
    ));
    assert!(source.contains(
        "return request(\"PUT\", \"/my-models/:id\", { path: { \"id\": id }, body: data });"
    ));
    assert!(source.contains(
        "  prototype$updateAttributes: async (id: any, data?: Record<string, any>): Promise<any> => {"
    ));
    assert!(!source.contains("Helper"));
}

fn product_registry() -> StaticRegistry {
    StaticRegistry::new().class(
        ClassBuilder::model("Product")
            .http_path("/products")
            .ctor_param(ParamDescriptor::new("id").required().source(ParamSource::Path))
            .method(MethodBuilder::static_method("find").route("get", "/"))
            .method(
                MethodBuilder::static_method("findAll")
                    .route("get", "/all")
                    .alias("find")
                    .alias("list"),
            )
            .method(
                MethodBuilder::prototype("updateAttributes")
                    .route("put", "/")
                    .accepts(ParamDescriptor::new("id").required().source(ParamSource::Path))
                    .accepts(ParamDescriptor::new("data").ty("object").source(ParamSource::Body)),
            )
            .build(),
    )
}

#[test]
fn fetch_declares_each_parameter_once() {
    let options = GenerateOptions::new().template("fetch");

    let generated = generate_services(&product_registry(), &builtin_templates(), &options).unwrap();
    let source = &generated.source;

    assert!(source.contains(
        "  prototype$updateAttributes: async (id: any, data?: Record<string, any>): Promise<any> => {\n    \
         return request(\"PUT\", \"/products/:id\", { path: { \"id\": id }, body: data });"
    ));
    assert!(!source.contains("id: any, id: any"));
}

#[test]
fn fetch_aliases_never_shadow_actions() {
    let options = GenerateOptions::new().template("fetch");

    let generated = generate_services(&product_registry(), &builtin_templates(), &options).unwrap();
    let source = &generated.source;

    assert_eq!(source.matches("\n  find: async").count(), 1);
    assert!(source.contains("  find: async (): Promise<any> => {\n    return request(\"GET\", \"/products\", {});"));
    assert!(source.contains("  list: async (): Promise<any> => {\n    return request(\"GET\", \"/products/all\", {});"));
}

#[test]
fn fetch_params_sharing_an_identifier_fail() {
    let registry = StaticRegistry::new().class(
        ClassBuilder::model("Order")
            .method(
                MethodBuilder::static_method("track")
                    .route("get", "/track")
                    .accepts(ParamDescriptor::new("order-id"))
                    .accepts(ParamDescriptor::new("orderId")),
            )
            .build(),
    );

    let err = generate_services(&registry, &builtin_templates(), &GenerateOptions::new().template("fetch"))
        .unwrap_err();

    assert!(matches!(
        err,
        GenerateError::Render(RenderError::IdentifierConflict { ref identifier, .. }) if identifier == "orderId"
    ));
}

#[test]
fn unknown_template_is_reported() {
    let err = generate(DOCUMENT, GenerateOptions::new().template("react")).unwrap_err();

    match err {
        GenerateError::TemplateNotFound { name, available } => {
            assert_eq!(name, "react");
            assert_eq!(available, "angular, fetch");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn conflicting_factory_names_fail() {
    let document = r#"{
      "classes": [
        { "name": "product", "ctor": {} },
        { "name": "Product", "ctor": {} }
      ]
    }"#;

    let err = generate(document, GenerateOptions::new()).unwrap_err();

    assert!(matches!(
        err,
        GenerateError::Render(RenderError::IdentifierConflict { .. })
    ));
}
