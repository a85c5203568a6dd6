//! Scoring policy - the two tunable constants of per-file scoring

use serde::{Deserialize, Serialize};

pub const DEFAULT_THRESHOLD: f64 = 0.5;
pub const DEFAULT_BASE_OFFSET: f64 = 0.5;

/// Files scoring below `threshold` are misaligned. `base_offset` is added to
/// the accumulated evidence before clamping to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default = "default_base_offset")]
    pub base_offset: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            base_offset: DEFAULT_BASE_OFFSET,
        }
    }
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_base_offset() -> f64 {
    DEFAULT_BASE_OFFSET
}

impl ScoringPolicy {
    pub fn is_misaligned(&self, score: f64) -> bool {
        score < self.threshold
    }

    /// Apply the base offset and clamp into `[0, 1]`.
    pub fn finalize(&self, running_score: f64) -> f64 {
        (running_score + self.base_offset).clamp(0.0, 1.0)
    }
}
