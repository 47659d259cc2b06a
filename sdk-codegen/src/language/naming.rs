//! Naming conventions for generated code.

/// Language-specific naming conventions.
///
/// Defines how model and parameter names become identifiers, and how
/// reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a model name to a binding name (e.g., "product" -> "Product")
    pub model_to_binding: fn(&str) -> String,
    /// Transform a parameter name to a variable name
    pub param_to_name: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "delete" -> "_delete")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a binding name.
    pub fn binding_name(&self, name: &str) -> String {
        let transformed = (self.model_to_binding)(name);
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a parameter name.
    pub fn param_name(&self, name: &str) -> String {
        let transformed = (self.param_to_name)(name);
        self.safe_name(&transformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_NAMING: NamingConvention = NamingConvention {
        model_to_binding: sirasdk_core::capitalize_first,
        param_to_name: sirasdk_core::to_camel_case,
        reserved_words: &["delete", "Delete"],
        escape_reserved: underscore,
    };

    fn underscore(name: &str) -> String {
        format!("_{}", name)
    }

    #[test]
    fn test_binding_name() {
        assert_eq!(TEST_NAMING.binding_name("product"), "Product");
        assert_eq!(TEST_NAMING.binding_name("delete"), "_Delete");
    }

    #[test]
    fn test_param_name() {
        assert_eq!(TEST_NAMING.param_name("order_id"), "orderId");
        assert_eq!(TEST_NAMING.param_name("delete"), "_delete");
    }
}
