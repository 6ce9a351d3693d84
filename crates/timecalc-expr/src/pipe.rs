//! Piping expressions into processor chains.
//!
//! `expr | group` makes the expression the group's upstream and returns the
//! group, which becomes the head of the pipeline. `expr | chainable` feeds
//! the expression's output into the chainable's processor. In both cases the
//! expression's pending operations are kept, so the chain sees the combined
//! timeline rather than the base processor's output.

use std::ops;

use timecalc_chain::{Chainable, ChainableGroup, ChainedProcessor};

use crate::expression::TimelineExpression;

impl<I: ?Sized, T> TimelineExpression<I, T> {
    /// Wrap this expression so it can head a `Chainable` pipeline.
    pub fn chainable(self) -> Chainable<Self> {
        Chainable::new(self)
    }
}

impl<I: ?Sized, T, B, U> ops::BitOr<ChainableGroup<B, U>> for TimelineExpression<I, T> {
    type Output = ChainableGroup<B, TimelineExpression<I, T>>;

    fn bitor(self, rhs: ChainableGroup<B, U>) -> Self::Output {
        rhs.attach(self)
    }
}

impl<I: ?Sized, T, Q> ops::BitOr<Chainable<Q>> for TimelineExpression<I, T> {
    type Output = Chainable<ChainedProcessor<TimelineExpression<I, T>, Q>>;

    fn bitor(self, rhs: Chainable<Q>) -> Self::Output {
        Chainable::new(ChainedProcessor::new(self, rhs.into_inner()))
    }
}
