//! Builds a `ProjectFact` from one file's text.

use super::rules;
use crate::domain::entities::ProjectFact;
use crate::domain::value_objects::{LanguageFamily, Vocabulary};

/// Pure: the same path, content and extension always give the same fact.
#[derive(Debug, Clone, Copy)]
pub struct FactExtractor<'a> {
    vocabulary: &'a Vocabulary,
}

impl<'a> FactExtractor<'a> {
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// `extension` includes the leading dot. Declarations and imports are only
    /// looked for in JavaScript/TypeScript and Python files.
    pub fn extract(&self, relative_path: &str, content: &str, extension: &str) -> ProjectFact {
        let (declared_symbols, imported_modules) = match LanguageFamily::from_extension(extension)
        {
            LanguageFamily::JavaScript => (
                rules::javascript_declarations(content),
                rules::javascript_imports(content),
            ),
            LanguageFamily::Python => (
                rules::python_declarations(content),
                rules::python_imports(content),
            ),
            LanguageFamily::Plain => (Vec::new(), Vec::new()),
        };

        ProjectFact {
            relative_path: relative_path.to_string(),
            extension: extension.to_string(),
            line_count: content.split('\n').count(),
            declared_symbols,
            imported_modules,
            keyword_hits: rules::keyword_hits(content, &self.vocabulary.keywords),
            purpose_statements: rules::purpose_statements(content),
        }
    }
}
