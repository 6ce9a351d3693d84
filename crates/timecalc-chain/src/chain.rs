//! Single-item processor chains.

use std::fmt;
use std::marker::PhantomData;
use std::ops;

use timecalc_core::{Processor, Result};

use crate::group::ChainableGroup;

/// A processor that can be piped into other processors with `|`.
#[derive(Debug, Clone)]
pub struct Chainable<P> {
    processor: P,
}

impl<P> Chainable<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    /// The wrapped processor.
    pub fn processor(&self) -> &P {
        &self.processor
    }

    pub fn into_inner(self) -> P {
        self.processor
    }
}

impl<P: Processor> Processor for Chainable<P> {
    type Input = P::Input;
    type Output = P::Output;

    fn process(&self, input: &Self::Input) -> Result<Self::Output> {
        self.processor.process(input)
    }
}

impl<P, Q> ops::BitOr<Chainable<Q>> for Chainable<P> {
    type Output = Chainable<ChainedProcessor<P, Q>>;

    fn bitor(self, rhs: Chainable<Q>) -> Self::Output {
        Chainable::new(ChainedProcessor::new(self.processor, rhs.processor))
    }
}

impl<P, B, U> ops::BitOr<ChainableGroup<B, U>> for Chainable<P> {
    type Output = ChainableGroup<B, P>;

    fn bitor(self, rhs: ChainableGroup<B, U>) -> Self::Output {
        rhs.attach(self.processor)
    }
}

/// Runs `first`, then feeds its output into `second`.
#[derive(Debug, Clone)]
pub struct ChainedProcessor<A, B> {
    first: A,
    second: B,
}

impl<A, B> ChainedProcessor<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }
}

impl<A, B> Processor for ChainedProcessor<A, B>
where
    A: Processor,
    B: Processor<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    fn process(&self, input: &Self::Input) -> Result<Self::Output> {
        let intermediate = self.first.process(input)?;
        self.second.process(&intermediate)
    }
}

/// Passes its input through unchanged.
pub struct Identity<I> {
    _input: PhantomData<fn(&I)>,
}

impl<I> Identity<I> {
    pub fn new() -> Self {
        Self {
            _input: PhantomData,
        }
    }
}

impl<I> Default for Identity<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> Clone for Identity<I> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<I> fmt::Debug for Identity<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

impl<I: Clone> Processor for Identity<I> {
    type Input = I;
    type Output = I;

    fn process(&self, input: &I) -> Result<I> {
        Ok(input.clone())
    }
}
