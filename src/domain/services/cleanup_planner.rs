//! Cleanup planner and report confidence

use crate::domain::entities::{AlignmentAnalysis, CleanupAction, CleanupActionKind, CleanupPlan};
use crate::domain::value_objects::Level;

/// Confidence reported when nothing was scanned.
const EMPTY_PROJECT_CONFIDENCE: f64 = 0.5;

/// Components needed before coverage stops raising confidence.
const FULL_COVERAGE_COMPONENTS: f64 = 10.0;

/// One `remove_or_refactor` action per misaligned component, in report order.
pub fn plan_cleanup(analysis: &AlignmentAnalysis) -> CleanupPlan {
    let actions: Vec<CleanupAction> = analysis
        .misaligned_components
        .iter()
        .map(|component| CleanupAction {
            action: CleanupActionKind::RemoveOrRefactor,
            target: component.file.clone(),
            reason: format!("Alignment score: {:.2}", component.alignment_score),
            details: component.reasons.clone(),
            functions_affected: component.functions.iter().map(|f| f.name.clone()).collect(),
        })
        .collect();

    CleanupPlan {
        estimated_effort: Level::effort_for(actions.len()),
        risk_level: Level::Low,
        backup_recommended: true,
        actions,
    }
}

/// `0.7 * alignment + 0.3 * coverage`, coverage saturating at ten components.
pub fn confidence(analysis: &AlignmentAnalysis) -> f64 {
    if analysis.total_components == 0 {
        return EMPTY_PROJECT_CONFIDENCE;
    }

    let alignment = f64::from(analysis.alignment_percentage) / 100.0;
    let coverage = (analysis.total_components as f64 / FULL_COVERAGE_COMPONENTS).min(1.0);

    alignment * 0.7 + coverage * 0.3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{DeclaredSymbol, MisalignedComponent};

    fn analysis(misaligned: usize, total: usize, percentage: u32) -> AlignmentAnalysis {
        AlignmentAnalysis {
            alignment_percentage: percentage,
            misaligned_components: (0..misaligned)
                .map(|i| MisalignedComponent {
                    file: format!("src/legacy{}.js", i),
                    alignment_score: 0.2,
                    reasons: vec!["irrelevant_function_bookFlight".to_string()],
                    functions: vec![
                        DeclaredSymbol::function("bookFlight", 1),
                        DeclaredSymbol::class("FlightDesk", 8),
                    ],
                })
                .collect(),
            aligned_components: Vec::new(),
            total_components: total,
            cleanup_required: misaligned > 0,
            severity: Level::severity_for(f64::from(percentage)),
        }
    }

    #[test]
    fn one_action_per_misaligned_component() {
        let plan = plan_cleanup(&analysis(3, 10, 70));

        assert_eq!(plan.actions.len(), 3);
        assert_eq!(plan.estimated_effort, Level::Medium);
        assert_eq!(plan.risk_level, Level::Low);
        assert!(plan.backup_recommended);

        let first = &plan.actions[0];
        assert_eq!(first.action, CleanupActionKind::RemoveOrRefactor);
        assert_eq!(first.target, "src/legacy0.js");
        assert_eq!(first.functions_affected, vec!["bookFlight", "FlightDesk"]);
        assert_eq!(first.details, vec!["irrelevant_function_bookFlight"]);
        insta::assert_snapshot!(first.reason, @"Alignment score: 0.20");
    }

    #[test]
    fn effort_scales_with_action_count() {
        assert_eq!(plan_cleanup(&analysis(0, 4, 100)).estimated_effort, Level::Low);
        assert_eq!(plan_cleanup(&analysis(2, 4, 50)).estimated_effort, Level::Low);
        assert_eq!(plan_cleanup(&analysis(6, 8, 25)).estimated_effort, Level::High);
        assert!(plan_cleanup(&analysis(0, 4, 100)).is_empty());
    }

    #[test]
    fn confidence_blends_alignment_and_coverage() {
        assert_eq!(confidence(&analysis(0, 0, 100)), 0.5);

        let ten = confidence(&analysis(3, 10, 70));
        assert!((ten - (0.7 * 0.7 + 0.3)).abs() < 1e-9);

        let five = confidence(&analysis(0, 5, 100));
        assert!((five - (0.7 + 0.15)).abs() < 1e-9);

        let many = confidence(&analysis(0, 40, 100));
        assert!((many - 1.0).abs() < 1e-9);
    }
}
