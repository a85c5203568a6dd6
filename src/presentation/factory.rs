//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use tracing::warn;

use crate::application::AnalyzeUseCase;
use crate::config::Config;
use crate::error::AlignerResult;
use crate::infrastructure::LocalProjectSource;

/// Type alias for the concrete AnalyzeUseCase reading from local disk
pub type ConcreteAnalyzeUseCase = AnalyzeUseCase<LocalProjectSource>;

/// Create an analyze use case with all dependencies wired up
pub fn create_analyze_use_case(config: Config) -> ConcreteAnalyzeUseCase {
    let source = LocalProjectSource::new(config.scan.ignore.clone());
    AnalyzeUseCase::new(source, config)
}

/// Configuration for a run against `project_root`.
///
/// An explicit file replaces discovery; environment overrides apply either
/// way, and the result is validated. Unknown keys are logged, not fatal.
pub fn resolve_config(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> AlignerResult<Config> {
    let config = match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            for warning in &warnings {
                warn!("{}", warning);
            }
            config.with_env_overrides()
        }
        None => Config::load_or_default(project_root),
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AlignerError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[scoring]\nbase_offset = 0.7\n").unwrap();

        let config = resolve_config(Some(&path), None).unwrap();
        assert_eq!(config.scoring.base_offset, 0.7);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[scoring]\nthreshold = 2.0\n").unwrap();

        let err = resolve_config(Some(&path), None).unwrap_err();
        assert!(matches!(err, AlignerError::InvalidConfig { .. }));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(resolve_config(Some(&dir.path().join("nope.toml")), None).is_err());
    }

    #[test]
    fn factory_uses_configured_ignore_names() {
        let mut config = Config::default();
        config.scan.ignore = vec!["vendor".to_string()];

        let use_case = create_analyze_use_case(config);
        assert_eq!(use_case.config().scan.ignore, vec!["vendor"]);
    }
}
