//! Per-file alignment scorer
//!
//! Accumulates evidence from keyword hits, then declared symbols, starting
//! at 0. The policy's base offset is added at the end and the result clamped
//! to `[0, 1]`, so a file with no evidence either way scores exactly the
//! base offset.

use crate::domain::entities::{AlignmentVerdict, ProjectFact, PurposeProfile};
use crate::domain::value_objects::{ScoringPolicy, Vocabulary};

const KEYWORD_MATCH_WEIGHT: f64 = 0.3;
const IRRELEVANT_KEYWORD_PENALTY: f64 = 0.4;
const ORCHESTRATION_SYMBOL_WEIGHT: f64 = 0.4;
const IRRELEVANT_SYMBOL_PENALTY: f64 = 0.3;

const ORCHESTRATION_OBJECTIVE: &str = "orchestration";
const ORCHESTRATION_SYMBOL_STEM: &str = "orchestrat";

#[derive(Debug, Clone, Copy)]
pub struct AlignmentScorer<'a> {
    vocabulary: &'a Vocabulary,
    policy: ScoringPolicy,
}

impl<'a> AlignmentScorer<'a> {
    pub fn new(vocabulary: &'a Vocabulary, policy: ScoringPolicy) -> Self {
        Self { vocabulary, policy }
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Deterministic: the same fact and profile always give the same verdict.
    pub fn score(&self, fact: &ProjectFact, profile: &PurposeProfile) -> AlignmentVerdict {
        let objective_text = profile.objective_text();
        let off_domain = !profile.domain_focus.is_customer_service();

        let mut running = 0.0;
        let mut reasons = Vec::new();
        let mut purpose_served = Vec::new();

        for hit in &fact.keyword_hits {
            if objective_text.contains(hit.keyword.to_lowercase().as_str()) {
                running += KEYWORD_MATCH_WEIGHT;
                purpose_served.push(format!("contains_{}", hit.keyword));
            } else if off_domain && self.vocabulary.is_domain_specific_keyword(&hit.keyword) {
                running -= IRRELEVANT_KEYWORD_PENALTY;
                reasons.push(format!("contains_irrelevant_{}_functionality", hit.keyword));
            }
        }

        let orchestration_purpose = objective_text.contains(ORCHESTRATION_OBJECTIVE);
        for symbol in &fact.declared_symbols {
            let lowered = symbol.name.to_lowercase();
            if orchestration_purpose && lowered.contains(ORCHESTRATION_SYMBOL_STEM) {
                running += ORCHESTRATION_SYMBOL_WEIGHT;
                purpose_served.push("orchestration_functionality".to_string());
            } else if off_domain && self.vocabulary.is_domain_specific_symbol(&lowered) {
                running -= IRRELEVANT_SYMBOL_PENALTY;
                reasons.push(format!("irrelevant_function_{}", symbol.name));
            }
        }

        AlignmentVerdict {
            score: self.policy.finalize(running),
            reasons,
            purpose_served,
        }
    }
}
