//! Configuration module for Aligner
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ALIGNER_*)
//! 3. Project config (`<root>/.aligner.toml`)
//! 4. User config (`<config dir>/aligner/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;
pub use crate::domain::value_objects::ScoringPolicy;

/// The `[scoring]` section of a config file.
pub type ScoringConfig = ScoringPolicy;

pub use loader::{with_env_overrides_from, PROJECT_CONFIG_FILE};
pub use types::{Config, ScanConfig};
