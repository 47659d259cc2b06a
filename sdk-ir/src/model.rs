//! Model descriptions handed from the describer to the templates.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{RestClass, RestMethod, SharedCtor};

/// A normalized model: the rest class plus derived flags.
///
/// Serializes as the class fields with `isUser` added alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescription {
    #[serde(flatten)]
    pub class: RestClass,
    /// True iff the model is the built-in user model.
    pub is_user: bool,
}

impl ModelDescription {
    /// Wrap a class, deriving `is_user` from its name.
    pub fn new(class: RestClass) -> Self {
        let is_user = class.name.to_lowercase() == "user";
        Self { class, is_user }
    }

    pub fn name(&self) -> &str {
        &self.class.name
    }

    pub fn ctor(&self) -> Option<&SharedCtor> {
        self.class.ctor.as_ref()
    }

    pub fn methods(&self) -> &[RestMethod] {
        &self.class.methods
    }

    pub fn http_path(&self) -> &str {
        &self.class.http_path
    }
}

/// Model descriptions keyed by model name, in registry order.
///
/// Equality is map equality: two collections with the same entries compare
/// equal regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ModelDescriptions(IndexMap<String, ModelDescription>);

impl ModelDescriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a description keyed by its name, returning any previous entry.
    pub fn insert(&mut self, model: ModelDescription) -> Option<ModelDescription> {
        self.0.insert(model.name().to_string(), model)
    }

    pub fn get(&self, name: &str) -> Option<&ModelDescription> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Model names in registry order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModelDescription> {
        self.0.values()
    }
}

impl<'a> IntoIterator for &'a ModelDescriptions {
    type Item = &'a ModelDescription;
    type IntoIter = indexmap::map::Values<'a, String, ModelDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> RestClass {
        RestClass {
            name: name.into(),
            ctor: Some(SharedCtor::new(vec![])),
            http_path: format!("/{}s", name.to_lowercase()),
            methods: vec![],
        }
    }

    #[test]
    fn test_is_user_is_case_insensitive() {
        assert!(ModelDescription::new(class("User")).is_user);
        assert!(ModelDescription::new(class("user")).is_user);
        assert!(ModelDescription::new(class("USER")).is_user);
        assert!(!ModelDescription::new(class("Product")).is_user);
        assert!(!ModelDescription::new(class("Users")).is_user);
    }

    #[test]
    fn test_equality_ignores_order() {
        let mut a = ModelDescriptions::new();
        a.insert(ModelDescription::new(class("Product")));
        a.insert(ModelDescription::new(class("User")));

        let mut b = ModelDescriptions::new();
        b.insert(ModelDescription::new(class("User")));
        b.insert(ModelDescription::new(class("Product")));

        assert_eq!(a, b);
        assert_eq!(a.names().collect::<Vec<_>>(), vec!["Product", "User"]);
    }

    #[test]
    fn test_serializes_is_user_next_to_class_fields() {
        let mut models = ModelDescriptions::new();
        models.insert(ModelDescription::new(class("User")));

        let json = serde_json::to_value(&models).unwrap();
        assert_eq!(json["User"]["name"], "User");
        assert_eq!(json["User"]["isUser"], true);
        assert_eq!(json["User"]["ctor"]["accepts"], serde_json::json!([]));
        assert_eq!(json["User"]["methods"], serde_json::json!([]));
    }
}
