//! Fluent builders for REST classes.
//!
//! Programmatic registries and tests use these instead of spelling out
//! every record field.

use sirasdk_ir::{HttpRoute, ParamDescriptor, RestClass, RestMethod, SharedCtor, SharedMethod};

/// Builder for a [`RestClass`].
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    name: String,
    ctor: Option<SharedCtor>,
    http_path: Option<String>,
    methods: Vec<MethodBuilder>,
}

impl ClassBuilder {
    /// A model class: it has a shared constructor (initially without parameters).
    pub fn model(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ctor: Some(SharedCtor::new(Vec::new())),
            http_path: None,
            methods: Vec::new(),
        }
    }

    /// A plain service class without a shared constructor.
    pub fn service(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ctor: None,
            http_path: None,
            methods: Vec::new(),
        }
    }

    /// Add a shared-constructor parameter, turning the class into a model.
    pub fn ctor_param(mut self, param: ParamDescriptor) -> Self {
        self.ctor
            .get_or_insert_with(|| SharedCtor::new(Vec::new()))
            .accepts
            .push(param);
        self
    }

    /// Set the class base path (defaults to `/<name>`).
    pub fn http_path(mut self, path: impl Into<String>) -> Self {
        self.http_path = Some(path.into());
        self
    }

    pub fn method(mut self, method: MethodBuilder) -> Self {
        self.methods.push(method);
        self
    }

    pub fn build(self) -> RestClass {
        let methods = self
            .methods
            .into_iter()
            .map(|m| m.build(&self.name))
            .collect();
        RestClass {
            http_path: self.http_path.unwrap_or_else(|| format!("/{}", self.name)),
            name: self.name,
            ctor: self.ctor,
            methods,
        }
    }
}

/// Builder for a [`RestMethod`].
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    name: String,
    is_static: bool,
    accepts: Vec<ParamDescriptor>,
    returns: Vec<ParamDescriptor>,
    routes: Vec<HttpRoute>,
    aliases: Vec<String>,
    description: Option<String>,
    rest_class: Option<String>,
}

impl MethodBuilder {
    fn new(name: impl Into<String>, is_static: bool) -> Self {
        Self {
            name: name.into(),
            is_static,
            accepts: Vec::new(),
            returns: Vec::new(),
            routes: Vec::new(),
            aliases: Vec::new(),
            description: None,
            rest_class: None,
        }
    }

    /// A static (collection-level) method.
    pub fn static_method(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// A prototype (instance-level) method.
    pub fn prototype(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn accepts(mut self, param: ParamDescriptor) -> Self {
        self.accepts.push(param);
        self
    }

    pub fn returns(mut self, param: ParamDescriptor) -> Self {
        self.returns.push(param);
        self
    }

    pub fn route(mut self, verb: &str, path: impl Into<String>) -> Self {
        self.routes.push(HttpRoute::new(verb, path));
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the owning class name (defaults to the enclosing class).
    pub fn rest_class(mut self, name: impl Into<String>) -> Self {
        self.rest_class = Some(name.into());
        self
    }

    fn build(self, class_name: &str) -> RestMethod {
        let routes = if self.routes.is_empty() {
            vec![HttpRoute::new("POST", format!("/{}", self.name))]
        } else {
            self.routes
        };
        RestMethod {
            name: self.name.clone(),
            accepts: self.accepts,
            routes,
            rest_class: self
                .rest_class
                .unwrap_or_else(|| class_name.to_string()),
            shared_method: SharedMethod {
                name: self.name,
                is_static: self.is_static,
                aliases: self.aliases,
                description: self.description,
                returns: self.returns,
            },
        }
    }
}
