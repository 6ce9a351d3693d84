//! TimeCalc Core - Foundation types for timeline arithmetic
//!
//! This crate provides the fundamental types used throughout TimeCalc:
//! - Samples and timelines (ordered `(time, value)` sequences)
//! - The `Processor` contract every timeline producer implements
//! - Stock sources for fixed and closure-backed timelines

pub mod error;
pub mod processor;
pub mod sample;
pub mod source;

pub use error::{Result, TimelineError};
pub use processor::Processor;
pub use sample::{Sample, Timeline};
pub use source::{ConstantSource, FnProcessor, StaticSource};
