//! TimeCalc Chain - Pipeline construction from processors.
//!
//! Processors are composed with the `|` operator:
//! - `Chainable | Chainable` feeds the left output into the right processor
//! - `Chainable | ChainableGroup` makes the left side the group's upstream

pub mod chain;
pub mod group;

pub use chain::{Chainable, ChainedProcessor, Identity};
pub use group::ChainableGroup;
