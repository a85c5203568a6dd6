//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain scoring rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `AnalyzeUseCase` - scan a project, score it against a purpose, plan cleanup

pub mod analyze;
pub mod dependencies;

pub use analyze::{AlignmentOutcome, AnalysisResponse, AnalyzeUseCase, FAILURE_PREFIX};
pub use dependencies::discover_dependencies;
