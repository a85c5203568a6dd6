//! File classification by extension

use serde::{Deserialize, Serialize};

/// Bucket a supported file is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Code,
    Config,
    Documentation,
    Other,
}

impl FileCategory {
    /// Classify an extension including its leading dot (`".ts"`).
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            ".js" | ".ts" | ".py" => FileCategory::Code,
            ".json" | ".yaml" | ".yml" => FileCategory::Config,
            ".md" => FileCategory::Documentation,
            _ => FileCategory::Other,
        }
    }
}

/// Which declaration/import rules apply to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageFamily {
    JavaScript,
    Python,
    /// Keywords and purpose statements only
    Plain,
}

impl LanguageFamily {
    pub fn from_extension(extension: &str) -> Self {
        match extension {
            ".js" | ".ts" => LanguageFamily::JavaScript,
            ".py" => LanguageFamily::Python,
            _ => LanguageFamily::Plain,
        }
    }
}
