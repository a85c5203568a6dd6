//! AlignmentVerdict entity - one file scored against one purpose

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentVerdict {
    /// Clamped to `[0, 1]`
    pub score: f64,
    /// Negative signals, in the order they were found
    pub reasons: Vec<String>,
    /// Positive signals, in the order they were found
    pub purpose_served: Vec<String>,
}
