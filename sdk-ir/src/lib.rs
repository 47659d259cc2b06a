//! REST metadata records for the Sira client SDK generator.
//!
//! These types replace the loosely-typed class/method objects a Sira
//! application exposes through its REST metadata. They are the single
//! source of truth shared by the registry loader, the model describer,
//! and the templates.
//!
//! # Architecture
//!
//! ```text
//! registry.json → sdk-registry (parse + lower) → sdk-ir (RestClass) → describe → templates
//! ```
//!
//! Field names serialize in camelCase (`isStatic`, `sharedMethod`,
//! `restClass`, `isUser`, ...) because templates and dumps pattern-match on
//! exactly those names.

mod class;
mod model;
mod param;

pub use class::{HttpRoute, RestClass, RestMethod, SharedCtor, SharedMethod};
pub use model::{ModelDescription, ModelDescriptions};
pub use param::{ParamDescriptor, ParamHttp, ParamSource};
