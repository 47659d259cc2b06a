//! JavaScript naming conventions.

use sirasdk_codegen::language::NamingConvention;
use sirasdk_core::{capitalize_first, is_js_identifier, to_camel_case};

fn escape_js_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// Turn an arbitrary name into a JavaScript identifier.
///
/// Valid identifiers are kept as-is; anything else is camel-cased and
/// stripped of characters an identifier cannot hold.
pub fn to_js_identifier(name: &str) -> String {
    if is_js_identifier(name) {
        return name.to_string();
    }
    let camel: String = to_camel_case(name)
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();
    match camel.chars().next() {
        None => "_".to_string(),
        Some(c) if c.is_ascii_digit() => format!("_{}", camel),
        Some(_) => camel,
    }
}

/// JavaScript (and TypeScript) naming conventions.
pub const JS_NAMING: NamingConvention = NamingConvention {
    // Bindings keep the model name with its first character upper-cased
    model_to_binding: capitalize_first,
    param_to_name: to_js_identifier,
    reserved_words: &[
        // JavaScript reserved words
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "let",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        // Strict mode and TypeScript
        "arguments",
        "await",
        "eval",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "static",
        // Names the generated request helpers already use
        "request",
        "urlBase",
    ],
    escape_reserved: escape_js_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_name() {
        assert_eq!(JS_NAMING.binding_name("product"), "Product");
        assert_eq!(
            JS_NAMING.binding_name("lower-case-not-an-identifier"),
            "Lower-case-not-an-identifier"
        );
    }

    #[test]
    fn test_param_name() {
        assert_eq!(JS_NAMING.param_name("id"), "id");
        assert_eq!(JS_NAMING.param_name("access-token"), "accessToken");
        assert_eq!(JS_NAMING.param_name("2fa"), "_2fa");
        assert_eq!(JS_NAMING.param_name("a.b"), "a_b");
    }

    #[test]
    fn test_reserved_words() {
        assert!(JS_NAMING.is_reserved("delete"));
        assert!(JS_NAMING.is_reserved("class"));
        assert!(!JS_NAMING.is_reserved("data"));
        assert_eq!(JS_NAMING.param_name("default"), "_default");
        assert_eq!(JS_NAMING.param_name("where"), "where");
    }
}
