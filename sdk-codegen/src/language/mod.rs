//! Target-language abstractions shared by templates.

mod naming;

pub use naming::NamingConvention;
