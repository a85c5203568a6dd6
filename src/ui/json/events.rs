//! Shared JSON event types for consistent CLI output.

use aligner::domain::entities::{ProjectAnalysis, ProjectFact};
use serde::Serialize;

/// Event emitted when a command fails before producing its result.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            message: message.into(),
        }
    }
}

/// One scanned file.
#[derive(Debug, Clone, Serialize)]
pub struct FactEvent<'a> {
    pub event: &'static str,
    #[serde(flatten)]
    pub fact: &'a ProjectFact,
}

impl<'a> FactEvent<'a> {
    pub fn new(fact: &'a ProjectFact) -> Self {
        Self {
            event: "fact",
            fact,
        }
    }
}

/// Closing event of `scan`.
#[derive(Debug, Clone, Serialize)]
pub struct ScanCompleteEvent<'a> {
    pub event: &'static str,
    pub total_files: usize,
    pub analysed_files: usize,
    pub code_files: usize,
    pub config_files: usize,
    pub documentation_files: usize,
    pub dependencies: &'a [String],
}

impl<'a> ScanCompleteEvent<'a> {
    pub fn new(project: &'a ProjectAnalysis) -> Self {
        Self {
            event: "complete",
            total_files: project.total_files,
            analysed_files: project.facts().len(),
            code_files: project.code_files.len(),
            config_files: project.config_files.len(),
            documentation_files: project.documentation_files.len(),
            dependencies: &project.dependencies,
        }
    }
}
