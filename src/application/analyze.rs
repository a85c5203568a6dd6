//! Analyze Use Case
//!
//! Orchestrates one alignment analysis:
//! 1. List project files through the `ProjectSource` port
//! 2. Extract a fact from every supported file
//! 3. Interpret the stated purpose
//! 4. Score and partition the facts
//! 5. Plan cleanup and compute confidence
//!
//! Each call is independent; nothing is cached between calls.

use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::dependencies::discover_dependencies;
use crate::config::Config;
use crate::domain::entities::{AlignmentAnalysis, CleanupPlan, ProjectAnalysis, PurposeProfile};
use crate::domain::ports::ProjectSource;
use crate::domain::services::{
    confidence, plan_cleanup, AlignmentScorer, FactExtractor, MisalignmentDetector,
    PurposeAnalyzer,
};
use crate::error::AlignerResult;

/// Prefix of every failure message at the analysis boundary
pub const FAILURE_PREFIX: &str = "Alignment analysis failed";

/// The complete report of one successful analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentOutcome {
    /// RFC 3339
    pub timestamp: String,
    pub project_path: String,
    pub stated_purpose: String,
    pub project_analysis: ProjectAnalysis,
    pub purpose_analysis: PurposeProfile,
    pub alignment_analysis: AlignmentAnalysis,
    pub cleanup_plan: CleanupPlan,
    pub confidence: f64,
}

/// Either a full report or a single error message; never a partial report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResponse {
    Report(Box<AlignmentOutcome>),
    Failure { error: String, timestamp: String },
}

impl AnalysisResponse {
    /// Error envelope for `err`, stamped with the current time.
    pub fn failure(err: impl std::fmt::Display) -> Self {
        Self::Failure {
            error: format!("{}: {}", FAILURE_PREFIX, err),
            timestamp: now(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    pub fn outcome(&self) -> Option<&AlignmentOutcome> {
        match self {
            Self::Report(outcome) => Some(outcome.as_ref()),
            Self::Failure { .. } => None,
        }
    }
}

pub struct AnalyzeUseCase<S: ProjectSource> {
    source: S,
    config: Config,
}

impl<S: ProjectSource> AnalyzeUseCase<S> {
    pub fn new(source: S, config: Config) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Walk `root` and extract a fact from every supported file.
    ///
    /// Only a failure to list `root` itself is an error. A file that cannot
    /// be read is analysed as empty.
    pub fn scan(&self, root: &Path) -> AlignerResult<ProjectAnalysis> {
        let files = self.source.list_files(root)?;
        let extractor = FactExtractor::new(&self.config.vocabulary);
        let mut project = ProjectAnalysis::new(files.len());

        for path in &files {
            let extension = extension_of(path);
            if !self.config.is_supported_extension(&extension) {
                continue;
            }

            let relative = relative_path(root, path);
            let content = match self.source.read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    warn!(file = %relative, error = %err, "unreadable file analysed as empty");
                    String::new()
                }
            };

            let fact = extractor.extract(&relative, &content, &extension);
            debug!(
                file = %relative,
                symbols = fact.declared_symbols.len(),
                keywords = fact.keyword_hits.len(),
                "extracted"
            );
            project.record(fact);
        }

        project.dependencies = discover_dependencies(&self.source, root);
        Ok(project)
    }

    pub fn execute(&self, root: &Path, stated_purpose: &str) -> AlignerResult<AlignmentOutcome> {
        let project_analysis = self.scan(root)?;

        let vocabulary = &self.config.vocabulary;
        let purpose_analysis = PurposeAnalyzer::new(vocabulary).analyze(stated_purpose);
        let scorer = AlignmentScorer::new(vocabulary, self.config.scoring);
        let alignment_analysis =
            MisalignmentDetector::new(scorer).detect(project_analysis.facts(), &purpose_analysis);
        let cleanup_plan = plan_cleanup(&alignment_analysis);
        let confidence = confidence(&alignment_analysis);

        info!(
            root = %root.display(),
            components = alignment_analysis.total_components,
            misaligned = alignment_analysis.misaligned_count(),
            percentage = alignment_analysis.alignment_percentage,
            "alignment analysis complete"
        );

        Ok(AlignmentOutcome {
            timestamp: now(),
            project_path: root.display().to_string(),
            stated_purpose: stated_purpose.to_string(),
            project_analysis,
            purpose_analysis,
            alignment_analysis,
            cleanup_plan,
            confidence,
        })
    }

    /// `execute`, with any failure folded into the error envelope.
    pub fn respond(&self, root: &Path, stated_purpose: &str) -> AnalysisResponse {
        match self.execute(root, stated_purpose) {
            Ok(outcome) => AnalysisResponse::Report(Box::new(outcome)),
            Err(err) => {
                warn!(root = %root.display(), error = %err, "alignment analysis failed");
                AnalysisResponse::failure(err)
            }
        }
    }
}

fn now() -> String {
    Utc::now().to_rfc3339()
}

/// `.ext` with the leading dot, or empty when there is none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Forward-slash path relative to `root`.
fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::project_source::MockProjectSource;
    use crate::domain::value_objects::{DomainFocus, Level};

    fn use_case(source: MockProjectSource) -> AnalyzeUseCase<MockProjectSource> {
        AnalyzeUseCase::new(source, Config::default())
    }

    #[test]
    fn orchestration_project_is_fully_aligned() {
        let source = MockProjectSource::new("/project")
            .with_file("src/orchestrator.js", "function runOrchestration() {}\n")
            .with_file("README.md", "# Demo\nPurpose: orchestrate agents\n");

        let outcome = use_case(source)
            .execute(Path::new("/project"), "build an orchestration platform")
            .unwrap();

        assert_eq!(
            outcome.purpose_analysis.domain_focus,
            DomainFocus::WorkflowOrchestration
        );
        let analysis = &outcome.alignment_analysis;
        assert_eq!(analysis.total_components, 2);
        assert_eq!(analysis.alignment_percentage, 100);
        assert!(!analysis.cleanup_required);
        assert_eq!(analysis.severity, Level::Low);
        assert!(outcome.cleanup_plan.is_empty());

        let orchestrator = &analysis.aligned_components[0];
        assert_eq!(orchestrator.file, "src/orchestrator.js");
        assert_eq!(orchestrator.alignment_score, 1.0);
        assert!(orchestrator
            .purpose_served
            .contains(&"orchestration_functionality".to_string()));
        assert_eq!(analysis.aligned_components[1].alignment_score, 0.5);
    }

    #[test]
    fn booking_code_is_misaligned_with_api_purpose() {
        let source = MockProjectSource::new("/project")
            .with_file("booking.js", "function processCustomerBooking() {}\n");

        let outcome = use_case(source)
            .execute(Path::new("/project"), "deploy a secure API")
            .unwrap();

        let analysis = &outcome.alignment_analysis;
        assert_eq!(analysis.alignment_percentage, 0);
        assert_eq!(analysis.severity, Level::High);

        let component = &analysis.misaligned_components[0];
        assert_eq!(component.alignment_score, 0.0);
        assert!(component
            .reasons
            .contains(&"irrelevant_function_processCustomerBooking".to_string()));
        assert_eq!(component.functions[0].name, "processCustomerBooking");

        let action = &outcome.cleanup_plan.actions[0];
        assert_eq!(action.target, "booking.js");
        assert_eq!(action.functions_affected, vec!["processCustomerBooking"]);
        assert_eq!(outcome.cleanup_plan.estimated_effort, Level::Low);
    }

    #[test]
    fn unsupported_files_count_but_are_not_scored() {
        let source = MockProjectSource::new("/project")
            .with_file("logo.png", "binary")
            .with_file("Makefile", "all:")
            .with_file("index.ts", "export class Widget {}\n");

        let outcome = use_case(source)
            .execute(Path::new("/project"), "anything")
            .unwrap();

        assert_eq!(outcome.project_analysis.total_files, 3);
        assert_eq!(outcome.project_analysis.code_files, vec!["index.ts"]);
        assert_eq!(outcome.alignment_analysis.total_components, 1);
    }

    #[test]
    fn empty_project_is_fully_aligned_with_default_confidence() {
        let outcome = use_case(MockProjectSource::new("/project"))
            .execute(Path::new("/project"), "anything")
            .unwrap();

        assert_eq!(outcome.alignment_analysis.alignment_percentage, 100);
        assert!(outcome.alignment_analysis.misaligned_components.is_empty());
        assert!(outcome.alignment_analysis.aligned_components.is_empty());
        assert_eq!(outcome.confidence, 0.5);
    }

    #[test]
    fn unreadable_file_degrades_to_empty_fact() {
        let source = MockProjectSource::new("/project")
            .with_unreadable("secret.py")
            .with_file("ok.py", "def flight_search():\n    pass\n");

        let outcome = use_case(source)
            .execute(Path::new("/project"), "anything")
            .unwrap();

        let facts = outcome.project_analysis.facts();
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].relative_path, "secret.py");
        assert_eq!(facts[0].line_count, 1);
        assert!(facts[0].declared_symbols.is_empty());
        assert_eq!(facts[1].declared_symbols[0].name, "flight_search");
    }

    #[test]
    fn respond_wraps_traversal_failure() {
        let response =
            use_case(MockProjectSource::new("/project")).respond(Path::new("/missing"), "x");

        assert!(response.is_failure());
        let json = serde_json::to_value(&response).unwrap();
        let error = json["error"].as_str().unwrap();
        assert!(error.starts_with("Alignment analysis failed: cannot read project root /missing"));
        assert!(json["timestamp"].is_string());
        assert!(json.get("alignment_analysis").is_none());
    }

    #[test]
    fn respond_report_serializes_flat_envelope() {
        let source = MockProjectSource::new("/project").with_file("a.md", "hello");
        let response = use_case(source).respond(Path::new("/project"), "monitoring");

        let json = serde_json::to_value(&response).unwrap();
        for key in [
            "timestamp",
            "project_path",
            "stated_purpose",
            "project_analysis",
            "purpose_analysis",
            "alignment_analysis",
            "cleanup_plan",
            "confidence",
        ] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(json["alignment_analysis"]["severity"], "low");
        assert!(response.outcome().is_some());
    }

    #[test]
    fn custom_threshold_changes_partition() {
        let source = MockProjectSource::new("/project").with_file("a.md", "hello");
        let mut config = Config::default();
        config.scoring.threshold = 0.6;

        let outcome = AnalyzeUseCase::new(source, config)
            .execute(Path::new("/project"), "anything")
            .unwrap();

        assert_eq!(outcome.alignment_analysis.misaligned_count(), 1);
        assert_eq!(
            outcome.cleanup_plan.actions[0].reason,
            "Alignment score: 0.50"
        );
    }

    #[test]
    fn relative_paths_use_forward_slashes() {
        assert_eq!(
            relative_path(Path::new("/project"), Path::new("/project/src/app.js")),
            "src/app.js"
        );
        assert_eq!(extension_of(Path::new("src/app.js")), ".js");
        assert_eq!(extension_of(Path::new(".gitignore")), "");
    }
}
