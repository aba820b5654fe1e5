//! Cascading attribute resolution.
//!
//! An element's resting parameters come from its own attributes, then its
//! ancestors', then global style variables read against the element, then a
//! caller fallback. `StyleTree` is the in-memory configuration source used
//! by tests and the CLI.

pub(crate) mod param;
pub(crate) mod resolver;
pub(crate) mod tree;
pub(crate) mod value;
