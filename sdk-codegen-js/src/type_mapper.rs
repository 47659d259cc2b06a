//! TypeScript type mapping for registry type strings.

/// Map a registry type string (e.g. "string", "[Product]") to a TypeScript type.
pub fn map_param_type(ty: &str) -> &'static str {
    if ty.starts_with('[') && ty.ends_with(']') {
        return "any[]";
    }
    match ty.to_ascii_lowercase().as_str() {
        "string" => "string",
        "number" => "number",
        "boolean" => "boolean",
        "date" => "string | Date",
        "array" => "any[]",
        "object" => "Record<string, any>",
        _ => "any",
    }
}
