//! Stock timeline sources.

use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

use crate::error::{Result, TimelineError};
use crate::processor::Processor;
use crate::sample::{Sample, Timeline};

// ── Static source ───────────────────────────────────────────────

/// Replays a fixed timeline regardless of its input.
pub struct StaticSource<I: ?Sized, T> {
    samples: Timeline<T>,
    _input: PhantomData<fn(&I)>,
}

impl<I: ?Sized, T> StaticSource<I, T> {
    /// Create a source that always yields `samples`.
    pub fn new(samples: Timeline<T>) -> Self {
        Self {
            samples,
            _input: PhantomData,
        }
    }

    /// Build a source from `(time, value)` pairs.
    pub fn from_pairs<V: Into<f64>>(pairs: impl IntoIterator<Item = (T, V)>) -> Self {
        Self::new(pairs.into_iter().map(|(t, v)| Sample::new(t, v)).collect())
    }

    /// The timeline this source replays.
    pub fn samples(&self) -> &[Sample<T>] {
        &self.samples
    }
}

impl<I: ?Sized, T: DeserializeOwned> StaticSource<I, T> {
    /// Load a source from a JSON array of `{"time": .., "value": ..}` objects.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let samples = serde_json::from_slice(data).map_err(|e| {
            TimelineError::Serialization(format!("Failed to parse timeline: {}", e))
        })?;
        Ok(Self::new(samples))
    }
}

impl<I: ?Sized, T: Clone> Processor for StaticSource<I, T> {
    type Input = I;
    type Output = Timeline<T>;

    fn process(&self, _input: &I) -> Result<Timeline<T>> {
        Ok(self.samples.clone())
    }
}

impl<I: ?Sized, T: fmt::Debug> fmt::Debug for StaticSource<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSource")
            .field("samples", &self.samples)
            .finish()
    }
}

// ── Constant source ─────────────────────────────────────────────

/// Yields the same value at each of a fixed set of times.
pub struct ConstantSource<I: ?Sized, T> {
    times: Vec<T>,
    value: f64,
    _input: PhantomData<fn(&I)>,
}

impl<I: ?Sized, T> ConstantSource<I, T> {
    /// Create a source that yields `value` at every time in `times`.
    pub fn new(times: impl IntoIterator<Item = T>, value: impl Into<f64>) -> Self {
        Self {
            times: times.into_iter().collect(),
            value: value.into(),
            _input: PhantomData,
        }
    }

    /// The value yielded at every time.
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl<I: ?Sized, T: Clone> Processor for ConstantSource<I, T> {
    type Input = I;
    type Output = Timeline<T>;

    fn process(&self, _input: &I) -> Result<Timeline<T>> {
        Ok(self
            .times
            .iter()
            .map(|t| Sample::new(t.clone(), self.value))
            .collect())
    }
}

// ── Closure-backed processor ────────────────────────────────────

/// Adapts a closure into a [`Processor`].
pub struct FnProcessor<F, I: ?Sized, O> {
    func: F,
    _marker: PhantomData<fn(&I) -> O>,
}

impl<F, I: ?Sized, O> FnProcessor<F, I, O>
where
    F: Fn(&I) -> Result<O>,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            _marker: PhantomData,
        }
    }
}

impl<F, I: ?Sized, O> Processor for FnProcessor<F, I, O>
where
    F: Fn(&I) -> Result<O>,
{
    type Input = I;
    type Output = O;

    fn process(&self, input: &I) -> Result<O> {
        (self.func)(input)
    }
}
