//! Generation pipeline.
//!
//! The [`Pipeline`] runs phases over a [`GenerationContext`] built from the
//! registry's classes:
//!
//! - Explicit phase boundaries (describe, then any user phases)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```
//! use sirasdk_codegen::pipeline::{Pipeline, Severity};
//! use sirasdk_registry::{ClassBuilder, StaticRegistry};
//!
//! let registry = StaticRegistry::new()
//!     .class(ClassBuilder::model("Product").build())
//!     .class(ClassBuilder::service("Mailer").build());
//!
//! let ctx = Pipeline::new().run_registry(&registry).unwrap();
//!
//! assert_eq!(ctx.models().map(|m| m.len()), Some(1));
//! assert!(ctx.diagnostics.iter().all(|d| d.severity == Severity::Warning));
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
