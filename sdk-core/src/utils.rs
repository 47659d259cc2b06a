//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Both `_` and `-` are treated as word separators.
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "user_id" -> "userId")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Upper-case the first character and leave the rest untouched.
///
/// This is the factory-name rule for generated bindings: `"lower-case"`
/// becomes `"Lower-case"`, not `"LowerCase"`.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Strip every trailing `/` from a URL (e.g., "/api//" -> "/api", "/" -> "").
pub fn strip_trailing_slashes(url: &str) -> &str {
    url.trim_end_matches('/')
}

/// Quote a string as a JavaScript/JSON string literal.
pub fn js_string(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// Check whether a name can be used as a bare JavaScript identifier.
pub fn is_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo-bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("user_id"), "userId");
        assert_eq!(to_camel_case("MyModel"), "myModel");
        assert_eq!(to_camel_case("access-token"), "accessToken");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("user"), "User");
        assert_eq!(
            capitalize_first("lower-case-not-an-identifier"),
            "Lower-case-not-an-identifier"
        );
        assert_eq!(capitalize_first("Product"), "Product");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_strip_trailing_slashes() {
        assert_eq!(strip_trailing_slashes("/"), "");
        assert_eq!(strip_trailing_slashes("/api"), "/api");
        assert_eq!(strip_trailing_slashes("http://host/api///"), "http://host/api");
        assert_eq!(strip_trailing_slashes(""), "");
    }

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("siras"), "\"siras\"");
        assert_eq!(js_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(js_string("a\nb"), "\"a\\nb\"");
    }

    #[test]
    fn test_is_js_identifier() {
        assert!(is_js_identifier("MyModel"));
        assert!(is_js_identifier("prototype$updateAttributes"));
        assert!(is_js_identifier("_private"));
        assert!(!is_js_identifier("Lower-case"));
        assert!(!is_js_identifier("1abc"));
        assert!(!is_js_identifier(""));
    }
}
