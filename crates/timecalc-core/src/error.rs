//! Error types for TimeCalc.

use thiserror::Error;

/// Main error type for timeline operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Length mismatch in operation {operation}: left has {left} samples, right has {right}")]
    LengthMismatch {
        operation: usize,
        left: usize,
        right: usize,
    },

    #[error("Time mismatch in operation {operation} at sample {index}: {left} vs {right}")]
    TimeMismatch {
        operation: usize,
        index: usize,
        left: String,
        right: String,
    },

    #[error("Source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for timeline operations.
pub type Result<T> = std::result::Result<T, TimelineError>;
