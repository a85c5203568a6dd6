//! Error types for Aligner
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::IgnoreError;

/// Result type alias for Aligner operations
pub type AlignerResult<T> = Result<T, AlignerError>;

/// Main error type for Aligner operations
#[derive(Error, Debug)]
pub enum AlignerError {
    /// Project root is missing or cannot be listed
    #[error("cannot read project root {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Project root exists but is a file
    #[error("project root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Configuration file is not valid TOML for the expected schema
    #[error("invalid configuration in {file}: {message}")]
    ConfigParse { file: PathBuf, message: String },

    /// Configuration value outside its allowed range
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidConfig { key: String, message: String },

    /// `.alignerignore` could not be loaded
    #[error(transparent)]
    Ignore(#[from] IgnoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AlignerError {
    /// True for failures that mean the project root itself could not be walked.
    pub fn is_traversal(&self) -> bool {
        matches!(self, Self::Traversal { .. } | Self::NotADirectory { .. })
    }
}
