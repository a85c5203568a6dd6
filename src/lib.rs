//! Aligner - project/purpose alignment analysis
//!
//! Aligner walks a project tree, extracts lightweight facts from each file
//! (declarations, imports, keyword hits, purpose statements), interprets a
//! free-text stated purpose, scores every file against it and produces an
//! aggregate report with a cleanup plan for misaligned files.
//!
//! ```no_run
//! let response = aligner::analyze_alignment("./my-project", "build an orchestration platform");
//! println!("{}", serde_json::to_string_pretty(&response).unwrap());
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

use std::path::Path;

// Re-exports for convenience
pub use application::{AlignmentOutcome, AnalysisResponse, AnalyzeUseCase};
pub use config::Config;
pub use domain::entities::{
    AlignmentAnalysis, AlignmentVerdict, CleanupPlan, ProjectAnalysis, ProjectFact,
    PurposeProfile,
};
pub use error::{AlignerError, AlignerResult};

/// Analyse the project at `root` against `stated_purpose`.
///
/// Configuration is discovered from `<root>/.aligner.toml`, the user config
/// directory and `ALIGNER_*` environment variables. Never fails: a root that
/// cannot be walked, or a configuration that does not validate, yields
/// `AnalysisResponse::Failure`.
pub fn analyze_alignment(root: impl AsRef<Path>, stated_purpose: &str) -> AnalysisResponse {
    let root = root.as_ref();
    let config = Config::load_or_default(Some(root));
    if let Err(err) = config.validate() {
        tracing::warn!(root = %root.display(), error = %err, "rejecting configuration");
        return AnalysisResponse::failure(err);
    }
    presentation::create_analyze_use_case(config).respond(root, stated_purpose)
}
