//! Domain Entities
//!
//! Every entity is created fresh for one analysis call and never shared with
//! a later one.
//! - `ProjectFact` - what was extracted from one scanned file
//! - `ProjectAnalysis` - all facts of a project plus file categories
//! - `PurposeProfile` - the interpreted stated purpose
//! - `AlignmentVerdict` - one file's score against the purpose
//! - `AlignmentAnalysis` - the partitioned project-wide result
//! - `CleanupPlan` - actions for misaligned files

mod alignment_analysis;
mod cleanup_plan;
mod project_analysis;
mod project_fact;
mod purpose_profile;
mod verdict;

pub use alignment_analysis::{AlignedComponent, AlignmentAnalysis, MisalignedComponent};
pub use cleanup_plan::{CleanupAction, CleanupActionKind, CleanupPlan};
pub use project_analysis::ProjectAnalysis;
pub use project_fact::{DeclaredSymbol, KeywordHit, ProjectFact, PurposeStatement, SymbolKind};
pub use purpose_profile::{PurposeProfile, SUCCESS_CRITERIA};
pub use verdict::AlignmentVerdict;
