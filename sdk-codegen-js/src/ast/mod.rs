//! JavaScript/TypeScript AST builders for generating objects, functions,
//! and declarations.
//!
//! These provide a high-level API for constructing client code, which can
//! then be rendered via CodeBuilder.

mod consts;
mod fns;
mod objects;

pub use consts::Const;
pub use fns::{Fn, Param};
pub use objects::{FnExpr, JsObject, Property, PropertyValue};
