//! Property tests for the per-file scorer.

use proptest::prelude::*;

use aligner::domain::entities::{DeclaredSymbol, KeywordHit, ProjectFact};
use aligner::domain::services::{AlignmentScorer, PurposeAnalyzer};
use aligner::domain::value_objects::{ScoringPolicy, Vocabulary};

fn keyword() -> impl Strategy<Value = String> {
    prop::sample::select(Vocabulary::default().keywords)
}

fn symbol_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("runOrchestration".to_string()),
        Just("processCustomerBooking".to_string()),
        Just("searchFlights".to_string()),
        "[a-z][A-Za-z0-9_]{0,12}",
    ]
}

fn fact() -> impl Strategy<Value = ProjectFact> {
    (
        prop::collection::vec((keyword(), 1usize..5), 0..6),
        prop::collection::vec(symbol_name(), 0..6),
    )
        .prop_map(|(hits, symbols)| {
            let mut fact = ProjectFact::empty("src/generated.js", ".js");
            for (keyword, count) in hits {
                if fact.keyword_count(&keyword) == 0 {
                    fact.keyword_hits.push(KeywordHit { keyword, count });
                }
            }
            fact.declared_symbols = symbols
                .into_iter()
                .enumerate()
                .map(|(i, name)| DeclaredSymbol::function(name, i + 1))
                .collect();
            fact
        })
}

fn purpose() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("build an orchestration platform".to_string()),
        Just("deploy a secure API".to_string()),
        Just("customer service for an airline".to_string()),
        Just("performance monitoring and optimization".to_string()),
        ".{0,40}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scores are always clamped into [0, 1].
    #[test]
    fn property_score_is_bounded(fact in fact(), purpose in purpose()) {
        let vocab = Vocabulary::default();
        let profile = PurposeAnalyzer::new(&vocab).analyze(&purpose);
        let verdict = AlignmentScorer::new(&vocab, ScoringPolicy::default()).score(&fact, &profile);

        prop_assert!((0.0..=1.0).contains(&verdict.score));
    }

    /// PROPERTY: scoring the same pair twice gives the same verdict.
    #[test]
    fn property_score_is_idempotent(fact in fact(), purpose in purpose()) {
        let vocab = Vocabulary::default();
        let profile = PurposeAnalyzer::new(&vocab).analyze(&purpose);
        let scorer = AlignmentScorer::new(&vocab, ScoringPolicy::default());

        prop_assert_eq!(scorer.score(&fact, &profile), scorer.score(&fact, &profile));
    }

    /// PROPERTY: a file with no evidence scores exactly the base offset.
    #[test]
    fn property_no_evidence_scores_base_offset(purpose in purpose(), offset in 0.0f64..=1.0) {
        let vocab = Vocabulary::default();
        let profile = PurposeAnalyzer::new(&vocab).analyze(&purpose);
        let policy = ScoringPolicy { base_offset: offset, ..ScoringPolicy::default() };
        let fact = ProjectFact::empty("empty.md", ".md");

        let verdict = AlignmentScorer::new(&vocab, policy).score(&fact, &profile);

        prop_assert_eq!(verdict.score, offset);
        prop_assert!(verdict.reasons.is_empty());
    }
}
