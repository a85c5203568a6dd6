//! Property tests for the misalignment detector and cleanup planner.

use proptest::prelude::*;

use aligner::domain::entities::{DeclaredSymbol, KeywordHit, ProjectFact};
use aligner::domain::services::{
    alignment_percentage, confidence, plan_cleanup, AlignmentScorer, MisalignmentDetector,
    PurposeAnalyzer,
};
use aligner::domain::value_objects::{ScoringPolicy, Vocabulary};

fn facts() -> impl Strategy<Value = Vec<ProjectFact>> {
    prop::collection::vec((any::<bool>(), any::<bool>()), 0..25).prop_map(|flags| {
        flags
            .into_iter()
            .enumerate()
            .map(|(i, (booking, orchestration))| {
                let mut fact = ProjectFact::empty(format!("src/file{}.js", i), ".js");
                if booking {
                    fact.keyword_hits.push(KeywordHit {
                        keyword: "booking".to_string(),
                        count: 1,
                    });
                }
                if orchestration {
                    fact.declared_symbols
                        .push(DeclaredSymbol::function("startOrchestration", 1));
                }
                fact
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every fact lands in exactly one partition, in input order.
    #[test]
    fn property_partition_is_exhaustive_and_ordered(
        facts in facts(),
        threshold in 0.0f64..=1.0,
    ) {
        let vocab = Vocabulary::default();
        let profile = PurposeAnalyzer::new(&vocab).analyze("build an orchestration platform");
        let policy = ScoringPolicy { threshold, ..ScoringPolicy::default() };
        let analysis = MisalignmentDetector::new(AlignmentScorer::new(&vocab, policy))
            .detect(&facts, &profile);

        prop_assert_eq!(
            analysis.aligned_count() + analysis.misaligned_count(),
            analysis.total_components
        );
        prop_assert_eq!(analysis.total_components, facts.len());

        let mut seen: Vec<&str> = analysis
            .aligned_components
            .iter()
            .map(|c| c.file.as_str())
            .chain(analysis.misaligned_components.iter().map(|c| c.file.as_str()))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), facts.len());

        for component in &analysis.misaligned_components {
            prop_assert!(component.alignment_score < threshold);
        }
        for component in &analysis.aligned_components {
            prop_assert!(component.alignment_score >= threshold);
        }

        prop_assert_eq!(analysis.cleanup_required, analysis.misaligned_count() > 0);
    }

    /// PROPERTY: one cleanup action per misaligned component.
    #[test]
    fn property_cleanup_plan_matches_misaligned(facts in facts()) {
        let vocab = Vocabulary::default();
        let profile = PurposeAnalyzer::new(&vocab).analyze("deploy a secure API");
        let analysis = MisalignmentDetector::new(
            AlignmentScorer::new(&vocab, ScoringPolicy::default()),
        )
        .detect(&facts, &profile);

        let plan = plan_cleanup(&analysis);
        prop_assert_eq!(plan.actions.len(), analysis.misaligned_count());
        prop_assert!(plan.backup_recommended);

        let c = confidence(&analysis);
        prop_assert!((0.0..=1.0).contains(&c));
    }

    /// PROPERTY: alignment percentage is within 0..=100 and 100 when nothing is misaligned.
    #[test]
    fn property_percentage_bounds(total in 0usize..500, misaligned_share in 0.0f64..=1.0) {
        let misaligned = (total as f64 * misaligned_share).floor() as usize;
        let pct = alignment_percentage(total, misaligned);

        prop_assert!(pct <= 100);
        if misaligned == 0 {
            prop_assert_eq!(pct, 100);
        }
    }
}
