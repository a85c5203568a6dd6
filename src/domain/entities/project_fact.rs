//! ProjectFact entity - lightweight facts extracted from one file
//!
//! Facts come from pattern matching only; nothing is parsed or executed.

use serde::Serialize;

use crate::domain::value_objects::FileCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Function,
    Class,
}

/// A function or class declaration found in source text.
///
/// Names are not unique within a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredSymbol {
    pub name: String,
    pub kind: SymbolKind,
    /// 1-based
    pub line_number: usize,
}

impl DeclaredSymbol {
    pub fn function(name: impl Into<String>, line_number: usize) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Function,
            line_number,
        }
    }

    pub fn class(name: impl Into<String>, line_number: usize) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Class,
            line_number,
        }
    }
}

/// Occurrence count of a vocabulary term. Only terms with `count > 0` are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordHit {
    pub keyword: String,
    pub count: usize,
}

/// Text following a `purpose:`-style label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurposeStatement {
    pub text: String,
    /// 1-based
    pub line_number: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectFact {
    /// Path relative to the project root; unique within one scan
    pub relative_path: String,
    /// Including the leading dot
    pub extension: String,
    pub line_count: usize,
    pub declared_symbols: Vec<DeclaredSymbol>,
    pub imported_modules: Vec<String>,
    /// In vocabulary order
    pub keyword_hits: Vec<KeywordHit>,
    /// In order of appearance
    pub purpose_statements: Vec<PurposeStatement>,
}

impl ProjectFact {
    /// A fact with no extracted content, as produced for an empty file.
    pub fn empty(relative_path: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            extension: extension.into(),
            line_count: 1,
            declared_symbols: Vec::new(),
            imported_modules: Vec::new(),
            keyword_hits: Vec::new(),
            purpose_statements: Vec::new(),
        }
    }

    pub fn category(&self) -> FileCategory {
        FileCategory::from_extension(&self.extension)
    }

    pub fn keyword_count(&self, keyword: &str) -> usize {
        self.keyword_hits
            .iter()
            .find(|hit| hit.keyword == keyword)
            .map(|hit| hit.count)
            .unwrap_or(0)
    }

    pub fn symbol_names(&self) -> Vec<String> {
        self.declared_symbols.iter().map(|s| s.name.clone()).collect()
    }
}
