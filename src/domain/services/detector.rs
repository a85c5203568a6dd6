//! Misalignment detector - scores every fact and partitions the project

use super::AlignmentScorer;
use crate::domain::entities::{
    AlignedComponent, AlignmentAnalysis, MisalignedComponent, ProjectFact, PurposeProfile,
};
use crate::domain::value_objects::Level;

#[derive(Debug, Clone, Copy)]
pub struct MisalignmentDetector<'a> {
    scorer: AlignmentScorer<'a>,
}

impl<'a> MisalignmentDetector<'a> {
    pub fn new(scorer: AlignmentScorer<'a>) -> Self {
        Self { scorer }
    }

    /// Every fact lands in exactly one partition; both keep the input order.
    pub fn detect(&self, facts: &[ProjectFact], profile: &PurposeProfile) -> AlignmentAnalysis {
        let policy = self.scorer.policy();
        let mut misaligned_components = Vec::new();
        let mut aligned_components = Vec::new();

        for fact in facts {
            let verdict = self.scorer.score(fact, profile);
            if policy.is_misaligned(verdict.score) {
                misaligned_components.push(MisalignedComponent {
                    file: fact.relative_path.clone(),
                    alignment_score: verdict.score,
                    reasons: verdict.reasons,
                    functions: fact.declared_symbols.clone(),
                });
            } else {
                aligned_components.push(AlignedComponent {
                    file: fact.relative_path.clone(),
                    alignment_score: verdict.score,
                    purpose_served: verdict.purpose_served,
                });
            }
        }

        let total_components = facts.len();
        let exact = exact_percentage(total_components, misaligned_components.len());

        AlignmentAnalysis {
            alignment_percentage: exact.round() as u32,
            cleanup_required: !misaligned_components.is_empty(),
            severity: Level::severity_for(exact),
            misaligned_components,
            aligned_components,
            total_components,
        }
    }
}

/// `round(100 * aligned / total)`, or 100 for an empty project.
pub fn alignment_percentage(total: usize, misaligned: usize) -> u32 {
    exact_percentage(total, misaligned).round() as u32
}

/// Unrounded share of aligned files; severity is banded on this value.
fn exact_percentage(total: usize, misaligned: usize) -> f64 {
    if total == 0 {
        return 100.0;
    }
    let aligned = total.saturating_sub(misaligned) as f64;
    aligned * 100.0 / total as f64
}
