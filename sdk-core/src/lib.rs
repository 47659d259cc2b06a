//! Core utilities and types for the Sira client SDK generator.
//!
//! This crate provides fundamental helpers shared by the registry,
//! the describer, and the templates.

mod file;
mod utils;

// File operations
pub use file::{File, FileRules};
// String utilities
pub use utils::{
    capitalize_first, is_js_identifier, js_string, strip_trailing_slashes, to_camel_case,
    to_pascal_case,
};
