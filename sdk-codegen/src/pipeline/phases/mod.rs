//! Built-in pipeline phases.
//!
//! - [`DescribePhase`] - turns classes into model descriptions

mod describe;

pub use describe::DescribePhase;
