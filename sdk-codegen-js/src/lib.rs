//! JavaScript client templates for the Sira client SDK generator.
//!
//! Templates turn the model descriptions produced by
//! [`sirasdk_codegen::describe_models`] into a single client source file.
//!
//! # Usage
//!
//! ```
//! use sirasdk_codegen::{GenerateOptions, generate_services};
//! use sirasdk_codegen_js::builtin_templates;
//! use sirasdk_registry::{ClassBuilder, MethodBuilder, StaticRegistry};
//!
//! let registry = StaticRegistry::new().class(
//!     ClassBuilder::model("Product")
//!         .method(MethodBuilder::static_method("find").route("get", "/"))
//!         .build(),
//! );
//!
//! let generated = generate_services(&registry, &builtin_templates(), &GenerateOptions::new())?;
//! assert!(generated.source.contains("module.factory(\"Product\", ["));
//! # Ok::<(), sirasdk_codegen::GenerateError>(())
//! ```
//!
//! # Templates
//!
//! - `angular` (default) - AngularJS module with one `$resource` factory per
//!   model, plus `SiraAuth` and the request interceptor
//! - `fetch` - dependency-free TypeScript client

mod code_file;
mod naming;
mod type_mapper;

pub mod ast;
pub mod templates;

pub use code_file::{CodeFile, RawCode};
pub use naming::{JS_NAMING, to_js_identifier};
pub use sirasdk_codegen::DEFAULT_TEMPLATE;
pub use templates::{AngularTemplate, FetchTemplate, builtin_templates};
pub use type_mapper::map_param_type;
