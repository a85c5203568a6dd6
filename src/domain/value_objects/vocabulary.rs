//! Vocabulary value object
//!
//! All keyword tables used by extraction, purpose analysis and scoring live
//! here as ordered data, so a config file or a test can substitute its own.
//! Every pattern is matched as a lower-case substring.

use serde::{Deserialize, Serialize};

use super::DomainFocus;

/// `pattern` found in a purpose statement adds `tag` to its objectives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveRule {
    pub pattern: String,
    pub tag: String,
}

/// Any of `patterns` found in a purpose statement selects `domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRule {
    pub domain: DomainFocus,
    pub patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Terms counted in every scanned file
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Keyword hits penalised outside the customer service domain
    #[serde(default = "default_domain_specific_keywords")]
    pub domain_specific_keywords: Vec<String>,

    /// Symbol name fragments penalised outside the customer service domain
    #[serde(default = "default_domain_specific_symbol_terms")]
    pub domain_specific_symbol_terms: Vec<String>,

    /// Evaluated in order; every match contributes
    #[serde(default = "default_objectives")]
    pub objectives: Vec<ObjectiveRule>,

    /// Evaluated in order; first match wins
    #[serde(default = "default_domains")]
    pub domains: Vec<DomainRule>,

    #[serde(default = "default_technologies")]
    pub technologies: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            domain_specific_keywords: default_domain_specific_keywords(),
            domain_specific_symbol_terms: default_domain_specific_symbol_terms(),
            objectives: default_objectives(),
            domains: default_domains(),
            technologies: default_technologies(),
        }
    }
}

impl Vocabulary {
    pub fn is_domain_specific_keyword(&self, keyword: &str) -> bool {
        self.domain_specific_keywords.iter().any(|k| k == keyword)
    }

    /// True if a lower-cased symbol name contains any customer-facing fragment.
    pub fn is_domain_specific_symbol(&self, lowered_name: &str) -> bool {
        self.domain_specific_symbol_terms
            .iter()
            .any(|term| lowered_name.contains(term.as_str()))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_keywords() -> Vec<String> {
    strings(&[
        "orchestration",
        "agent",
        "customer",
        "service",
        "flight",
        "booking",
        "deployment",
        "security",
        "monitoring",
        "performance",
        "optimization",
        "intelligent",
        "alignment",
        "engineering",
    ])
}

fn default_domain_specific_keywords() -> Vec<String> {
    strings(&["customer", "flight", "booking", "airline"])
}

fn default_domain_specific_symbol_terms() -> Vec<String> {
    strings(&["customer", "flight", "booking"])
}

fn default_objectives() -> Vec<ObjectiveRule> {
    [
        ("orchestration", "workflow coordination"),
        ("deploy", "application deployment"),
        ("security", "security implementation"),
        ("monitoring", "system monitoring"),
        ("optimization", "performance optimization"),
        ("intelligence", "intelligent automation"),
        ("analysis", "data analysis"),
        ("management", "resource management"),
    ]
    .iter()
    .map(|(pattern, tag)| ObjectiveRule {
        pattern: pattern.to_string(),
        tag: tag.to_string(),
    })
    .collect()
}

fn default_domains() -> Vec<DomainRule> {
    vec![
        DomainRule {
            domain: DomainFocus::CustomerService,
            patterns: strings(&["customer service", "airline"]),
        },
        DomainRule {
            domain: DomainFocus::WorkflowOrchestration,
            patterns: strings(&["orchestration", "workflow"]),
        },
        DomainRule {
            domain: DomainFocus::Infrastructure,
            patterns: strings(&["deployment", "infrastructure"]),
        },
        DomainRule {
            domain: DomainFocus::Security,
            patterns: strings(&["security"]),
        },
    ]
}

fn default_technologies() -> Vec<String> {
    strings(&[
        "amazon q",
        "aws",
        "node.js",
        "python",
        "javascript",
        "docker",
        "kubernetes",
        "mcp",
        "api",
        "database",
        "postgresql",
        "redis",
    ])
}
