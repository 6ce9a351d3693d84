//! The processor contract.
//!
//! A processor turns an input into an output on demand. Timeline producers are
//! processors whose output is a [`Timeline`](crate::Timeline); the input is
//! opaque pass-through data whose meaning each processor defines for itself.

use std::sync::Arc;

use crate::error::Result;

/// Something that, given an input, produces an output.
pub trait Processor {
    /// What the processor consumes.
    type Input: ?Sized;
    /// What the processor produces.
    type Output;

    /// Run the processor on `input`.
    fn process(&self, input: &Self::Input) -> Result<Self::Output>;
}

impl<P: Processor + ?Sized> Processor for &P {
    type Input = P::Input;
    type Output = P::Output;

    fn process(&self, input: &Self::Input) -> Result<Self::Output> {
        (**self).process(input)
    }
}

impl<P: Processor + ?Sized> Processor for Box<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn process(&self, input: &Self::Input) -> Result<Self::Output> {
        (**self).process(input)
    }
}

impl<P: Processor + ?Sized> Processor for Arc<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn process(&self, input: &Self::Input) -> Result<Self::Output> {
        (**self).process(input)
    }
}
