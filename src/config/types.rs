//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ScoringPolicy, Vocabulary};
use crate::error::{AlignerError, AlignerResult};

use super::loader::{self, ConfigWarning};

/// What the project walk picks up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extensions (with leading dot) that are analysed; others are counted only
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Any path component containing one of these is skipped
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            ignore: default_ignore(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    [".js", ".ts", ".py", ".md", ".json", ".yaml", ".yml"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_ignore() -> Vec<String> {
    [
        "node_modules",
        ".git",
        ".vscode",
        "dist",
        "build",
        ".DS_Store",
        "coverage",
        ".nyc_output",
        "logs",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringPolicy,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub vocabulary: Vocabulary,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AlignerResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AlignerResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env overrides
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ALIGNER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn is_supported_extension(&self, extension: &str) -> bool {
        self.scan.extensions.iter().any(|e| e == extension)
    }

    /// Reject values the scorer cannot work with.
    pub fn validate(&self) -> AlignerResult<()> {
        check_unit_interval("scoring.threshold", self.scoring.threshold)?;
        check_unit_interval("scoring.base_offset", self.scoring.base_offset)?;

        if self.scan.extensions.is_empty() {
            return Err(AlignerError::InvalidConfig {
                key: "scan.extensions".to_string(),
                message: "at least one extension is required".to_string(),
            });
        }
        if let Some(bad) = self.scan.extensions.iter().find(|e| !e.starts_with('.')) {
            return Err(AlignerError::InvalidConfig {
                key: "scan.extensions".to_string(),
                message: format!("'{}' must start with '.'", bad),
            });
        }
        Ok(())
    }
}

fn check_unit_interval(key: &str, value: f64) -> AlignerResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(AlignerError::InvalidConfig {
            key: key.to_string(),
            message: format!("{} is outside 0.0..=1.0", value),
        })
    }
}
