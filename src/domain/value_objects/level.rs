//! Three-step rating used for severity, estimated effort and risk

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Level {
    /// Severity for an unrounded alignment percentage: `< 50` high, `< 80` medium.
    pub fn severity_for(alignment_percentage: f64) -> Self {
        if alignment_percentage < 50.0 {
            Level::High
        } else if alignment_percentage < 80.0 {
            Level::Medium
        } else {
            Level::Low
        }
    }

    /// Effort for a number of cleanup actions: `> 5` high, `> 2` medium.
    pub fn effort_for(action_count: usize) -> Self {
        if action_count > 5 {
            Level::High
        } else if action_count > 2 {
            Level::Medium
        } else {
            Level::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
