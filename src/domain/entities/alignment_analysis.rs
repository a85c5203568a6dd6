//! AlignmentAnalysis entity - project-wide partition of verdicts

use serde::Serialize;

use super::DeclaredSymbol;
use crate::domain::value_objects::Level;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MisalignedComponent {
    pub file: String,
    pub alignment_score: f64,
    pub reasons: Vec<String>,
    pub functions: Vec<DeclaredSymbol>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedComponent {
    pub file: String,
    pub alignment_score: f64,
    pub purpose_served: Vec<String>,
}

/// Both partitions keep traversal order and together cover every scanned file once.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentAnalysis {
    pub alignment_percentage: u32,
    pub misaligned_components: Vec<MisalignedComponent>,
    pub aligned_components: Vec<AlignedComponent>,
    pub total_components: usize,
    pub cleanup_required: bool,
    pub severity: Level,
}

impl AlignmentAnalysis {
    pub fn misaligned_count(&self) -> usize {
        self.misaligned_components.len()
    }

    pub fn aligned_count(&self) -> usize {
        self.aligned_components.len()
    }
}
