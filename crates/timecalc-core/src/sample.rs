//! Samples and timelines.
//!
//! A timeline is an ordered sequence of `(time, value)` samples. The time key
//! is opaque to TimeCalc and only needs to be cloneable; values are always
//! stored as `f64`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `(time, value)` point on a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample<T> {
    /// Ordering key, commonly a numeric timestamp.
    pub time: T,
    /// Sample value.
    pub value: f64,
}

impl<T> Sample<T> {
    /// Create a sample, converting the value to `f64`.
    #[inline]
    pub fn new(time: T, value: impl Into<f64>) -> Self {
        Self {
            time,
            value: value.into(),
        }
    }

    /// Replace the value, keeping the time.
    #[inline]
    pub fn with_value(self, value: f64) -> Self {
        Self {
            time: self.time,
            value,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Sample<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.time, self.value)
    }
}

/// An ordered sequence of samples.
pub type Timeline<T> = Vec<Sample<T>>;
