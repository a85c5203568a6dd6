//! ProjectAnalysis entity - every fact of one scan, bucketed by category

use serde::Serialize;

use super::{DeclaredSymbol, ProjectFact};
use crate::domain::value_objects::FileCategory;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectAnalysis {
    /// Every file traversal found, supported or not
    pub total_files: usize,
    pub code_files: Vec<String>,
    pub config_files: Vec<String>,
    pub documentation_files: Vec<String>,
    /// Declarations of all code files, in traversal order
    pub functionality_detected: Vec<DeclaredSymbol>,
    pub dependencies: Vec<String>,
    /// Facts of supported files, in traversal order
    pub file_analysis: Vec<ProjectFact>,
}

impl ProjectAnalysis {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            ..Self::default()
        }
    }

    /// Add a fact and file it under its category.
    pub fn record(&mut self, fact: ProjectFact) {
        match fact.category() {
            FileCategory::Code => {
                self.code_files.push(fact.relative_path.clone());
                self.functionality_detected
                    .extend(fact.declared_symbols.iter().cloned());
            }
            FileCategory::Config => self.config_files.push(fact.relative_path.clone()),
            FileCategory::Documentation => {
                self.documentation_files.push(fact.relative_path.clone())
            }
            FileCategory::Other => {}
        }
        self.file_analysis.push(fact);
    }

    pub fn facts(&self) -> &[ProjectFact] {
        &self.file_analysis
    }
}
