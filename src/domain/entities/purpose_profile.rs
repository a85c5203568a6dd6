//! PurposeProfile entity - structured reading of a stated purpose

use serde::Serialize;

use crate::domain::value_objects::DomainFocus;

/// Fixed criteria every analysis is judged against.
pub const SUCCESS_CRITERIA: &[&str] = &[
    "implementation_matches_stated_purpose",
    "no_irrelevant_functionality",
    "all_components_serve_core_objectives",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurposeProfile {
    pub raw_text: String,
    /// Objective-dictionary patterns that fired, in dictionary order
    pub matched_terms: Vec<String>,
    /// Objective tags, in dictionary order, without duplicates
    pub core_objectives: Vec<String>,
    pub domain_focus: DomainFocus,
    pub technologies: Vec<String>,
    pub success_criteria: Vec<String>,
}

impl PurposeProfile {
    /// Lower-cased text that file keywords and symbols are compared against.
    ///
    /// Holds the matched terms followed by the objective tags, so a purpose
    /// mentioning "orchestration" is recognised even though its tag reads
    /// "workflow coordination".
    pub fn objective_text(&self) -> String {
        self.matched_terms
            .iter()
            .chain(self.core_objectives.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
