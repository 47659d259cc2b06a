//! Core operations.
//!
//! This module contains the business logic for sira-sdk commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod describe;
pub mod generate;
pub mod templates;

pub use check::check;
pub use describe::describe;
pub use generate::{GenerateTarget, generate};
pub use templates::templates;
