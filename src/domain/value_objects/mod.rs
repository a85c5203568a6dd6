//! Domain Value Objects
//!
//! Immutable value types shared by the extraction, purpose and scoring services.

mod config_warning;
mod domain_focus;
mod file_category;
mod ignore_patterns;
mod level;
mod scoring_policy;
mod vocabulary;

pub use config_warning::ConfigWarning;
pub use domain_focus::DomainFocus;
pub use file_category::{FileCategory, LanguageFamily};
pub use ignore_patterns::{IgnoreError, IgnorePatterns, IGNORE_FILE_NAME};
pub use level::Level;
pub use scoring_policy::ScoringPolicy;
pub use vocabulary::{DomainRule, ObjectiveRule, Vocabulary};
