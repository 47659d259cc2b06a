//! REST class and method records.

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::ParamDescriptor;

/// The shared constructor of a model.
///
/// Its parameters identify one instance (typically an `id` path segment)
/// and are implicitly required by every prototype method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharedCtor {
    pub accepts: Vec<ParamDescriptor>,
}

impl SharedCtor {
    pub fn new(accepts: Vec<ParamDescriptor>) -> Self {
        Self { accepts }
    }
}

/// The server-side method a REST endpoint dispatches to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedMethod {
    pub name: String,
    pub is_static: bool,
    pub aliases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub returns: Vec<ParamDescriptor>,
}

/// An HTTP route (verb + path relative to the class path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HttpRoute {
    pub verb: String,
    pub path: String,
}

impl HttpRoute {
    /// Create a route, normalizing the verb to upper case.
    pub fn new(verb: impl AsRef<str>, path: impl Into<String>) -> Self {
        Self {
            verb: verb.as_ref().to_ascii_uppercase(),
            path: path.into(),
        }
    }
}

/// One callable endpoint of a [`RestClass`].
///
/// Whether the method is static is owned by [`SharedMethod::is_static`];
/// the method's own `isStatic` field is derived from it when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestMethod {
    pub name: String,
    /// Ordered parameter list used to build the call signature.
    pub accepts: Vec<ParamDescriptor>,
    pub routes: Vec<HttpRoute>,
    /// Name of the owning class.
    pub rest_class: String,
    pub shared_method: SharedMethod,
}

impl RestMethod {
    pub fn is_static(&self) -> bool {
        self.shared_method.is_static
    }

    /// The action key used by generated bindings.
    ///
    /// Prototype methods are prefixed with `prototype$` so they cannot
    /// collide with a static method of the same name.
    pub fn action_name(&self) -> String {
        if self.is_static() {
            self.name.clone()
        } else {
            format!("prototype${}", self.name)
        }
    }

    /// The route bindings use for this method.
    pub fn first_route(&self) -> Option<&HttpRoute> {
        self.routes.first()
    }

    /// Returns true if the method's root return value is an array.
    pub fn is_returning_array(&self) -> bool {
        self.shared_method
            .returns
            .iter()
            .any(|r| r.root && r.is_array())
    }

    /// Aliases declared on the shared method.
    pub fn aliases(&self) -> &[String] {
        &self.shared_method.aliases
    }

    pub fn description(&self) -> Option<&str> {
        self.shared_method.description.as_deref()
    }
}

impl Serialize for RestMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RestMethod", 6)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("accepts", &self.accepts)?;
        state.serialize_field("isStatic", &self.is_static())?;
        state.serialize_field("routes", &self.routes)?;
        state.serialize_field("restClass", &self.rest_class)?;
        state.serialize_field("sharedMethod", &self.shared_method)?;
        state.end()
    }
}

/// A class exposed over REST.
///
/// Only classes with a shared constructor are models; plain service
/// classes have `ctor: None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestClass {
    pub name: String,
    pub ctor: Option<SharedCtor>,
    /// Base path of the class (e.g. "/products").
    pub http_path: String,
    pub methods: Vec<RestMethod>,
}

impl RestClass {
    /// Returns true if the class has a shared constructor.
    pub fn is_model(&self) -> bool {
        self.ctor.is_some()
    }
}
