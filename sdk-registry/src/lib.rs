//! REST metadata registries for the Sira client SDK generator.
//!
//! A registry is the generator's only input: anything that can enumerate
//! the REST-exposed classes of an application. This crate provides the
//! [`RestRegistry`] boundary trait plus two implementations:
//!
//! - [`RegistryFile`] / [`RegistryDocument`] - a JSON export of an
//!   application's REST metadata, parsed and shape-validated
//! - [`StaticRegistry`] - an in-memory list of classes

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod builder;
mod document;
mod error;
mod file;
mod memory;

pub use builder::{ClassBuilder, MethodBuilder};
pub use document::{RegistryDocument, parse_document};
pub use error::{RegistryError, Result, SourceContext};
pub use file::RegistryFile;
pub use memory::StaticRegistry;
use sirasdk_ir::RestClass;

/// A source of REST classes.
///
/// Implementations must return classes in a stable order; the describer
/// preserves it in its output.
pub trait RestRegistry {
    /// Build the full list of REST-exposed classes.
    ///
    /// # Errors
    ///
    /// Any failure is fatal to the generation request.
    fn build_classes(&self) -> Result<Vec<RestClass>>;

    /// The application's `resultful` setting, if it has one.
    fn resultful(&self) -> Option<bool> {
        None
    }
}

impl<R: RestRegistry + ?Sized> RestRegistry for &R {
    fn build_classes(&self) -> Result<Vec<RestClass>> {
        (**self).build_classes()
    }

    fn resultful(&self) -> Option<bool> {
        (**self).resultful()
    }
}
