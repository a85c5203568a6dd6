//! Purpose analyzer - turns a free-text stated purpose into a `PurposeProfile`

use crate::domain::entities::{PurposeProfile, SUCCESS_CRITERIA};
use crate::domain::value_objects::{DomainFocus, Vocabulary};

/// Never fails; an empty purpose yields no objectives and the `general` domain.
#[derive(Debug, Clone, Copy)]
pub struct PurposeAnalyzer<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> PurposeAnalyzer<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn analyze(&self, stated_purpose: &str) -> PurposeProfile {
        let lowered = stated_purpose.to_lowercase();
        let (matched_terms, core_objectives) = self.objectives(&lowered);

        PurposeProfile {
            raw_text: stated_purpose.to_string(),
            matched_terms,
            core_objectives,
            domain_focus: self.domain(&lowered),
            technologies: self.technologies(&lowered),
            success_criteria: SUCCESS_CRITERIA.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Every dictionary rule whose pattern occurs contributes, in dictionary order.
    fn objectives(&self, lowered: &str) -> (Vec<String>, Vec<String>) {
        let mut terms = Vec::new();
        let mut tags: Vec<String> = Vec::new();

        for rule in &self.vocabulary.objectives {
            if rule.pattern.is_empty() || !lowered.contains(&rule.pattern.to_lowercase()) {
                continue;
            }
            terms.push(rule.pattern.clone());
            if !tags.contains(&rule.tag) {
                tags.push(rule.tag.clone());
            }
        }

        (terms, tags)
    }

    /// First rule with any matching pattern wins.
    fn domain(&self, lowered: &str) -> DomainFocus {
        self.vocabulary
            .domains
            .iter()
            .find(|rule| {
                rule.patterns
                    .iter()
                    .any(|p| !p.is_empty() && lowered.contains(&p.to_lowercase()))
            })
            .map(|rule| rule.domain)
            .unwrap_or(DomainFocus::General)
    }

    fn technologies(&self, lowered: &str) -> Vec<String> {
        self.vocabulary
            .technologies
            .iter()
            .filter(|tech| !tech.is_empty() && lowered.contains(&tech.to_lowercase()))
            .cloned()
            .collect()
    }
}
