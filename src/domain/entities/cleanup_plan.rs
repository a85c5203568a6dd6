//! CleanupPlan entity - advisory actions for misaligned files

use serde::Serialize;

use crate::domain::value_objects::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanupActionKind {
    RemoveOrRefactor,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanupAction {
    pub action: CleanupActionKind,
    pub target: String,
    /// e.g. `Alignment score: 0.20`
    pub reason: String,
    pub details: Vec<String>,
    pub functions_affected: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleanupPlan {
    pub actions: Vec<CleanupAction>,
    pub estimated_effort: Level,
    pub risk_level: Level,
    pub backup_recommended: bool,
}

impl CleanupPlan {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
