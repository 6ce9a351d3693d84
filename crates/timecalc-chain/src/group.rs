//! Multi-branch processor groups.
//!
//! A group runs its upstream once, then hands the upstream output to every
//! branch. The output is one result per branch, in branch order.

use tracing::{debug, trace};

use timecalc_core::{Processor, Result};

use crate::chain::Identity;

/// A fan-out of branches sharing one upstream processor.
#[derive(Debug, Clone)]
pub struct ChainableGroup<B, U> {
    upstream: U,
    branches: Vec<B>,
}

impl<B, I> ChainableGroup<B, Identity<I>>
where
    B: Processor<Input = I>,
{
    /// Create a detached group. Until an upstream is attached, the group's
    /// input goes straight to the branches.
    pub fn new(branches: impl IntoIterator<Item = B>) -> Self {
        Self {
            upstream: Identity::new(),
            branches: branches.into_iter().collect(),
        }
    }
}

impl<B, U> ChainableGroup<B, U> {
    /// Replace the upstream, returning the re-headed group.
    pub fn attach<V>(self, upstream: V) -> ChainableGroup<B, V> {
        debug!(branches = self.branches.len(), "attaching group upstream");
        ChainableGroup {
            upstream,
            branches: self.branches,
        }
    }

    /// Append a branch.
    pub fn with_branch(mut self, branch: B) -> Self {
        self.branches.push(branch);
        self
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    pub fn branches(&self) -> &[B] {
        &self.branches
    }
}

impl<B, U> Processor for ChainableGroup<B, U>
where
    U: Processor,
    B: Processor<Input = U::Output>,
{
    type Input = U::Input;
    type Output = Vec<B::Output>;

    fn process(&self, input: &Self::Input) -> Result<Self::Output> {
        let shared = self.upstream.process(input)?;
        trace!(branches = self.branches.len(), "running group branches");
        self.branches
            .iter()
            .map(|branch| branch.process(&shared))
            .collect()
    }
}
