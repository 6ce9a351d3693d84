//! Evaluation settings.

use serde::{Deserialize, Serialize};
use timecalc_core::{Result, TimelineError};

/// How samples of two timelines are paired during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlignmentPolicy {
    /// Pair samples by index. The left sample's time is kept and the right
    /// sample's time is ignored.
    #[default]
    Positional,
    /// Pair samples by index and fail if their times differ.
    StrictTime,
}

/// Settings applied when an expression folds its operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub alignment: AlignmentPolicy,
}

impl EvaluationConfig {
    /// Positional pairing with a time check at every index.
    pub fn strict() -> Self {
        Self {
            alignment: AlignmentPolicy::StrictTime,
        }
    }

    /// Load settings from JSON. Missing fields take their defaults.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data)
            .map_err(|e| TimelineError::Serialization(format!("Invalid evaluation config: {}", e)))
    }
}
