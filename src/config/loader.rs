//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{AlignerError, AlignerResult};

use super::types::Config;

pub use crate::domain::value_objects::ConfigWarning;

/// Project-level config file, looked up in the analysed root
pub const PROJECT_CONFIG_FILE: &str = ".aligner.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AlignerResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AlignerError::ConfigParse {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    warn!("{}", warning);
                }
                debug!(path = %path.display(), "loaded configuration");
                return with_env_overrides(config);
            }
            Err(err) => warn!(path = %path.display(), error = %err, "skipping config file"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (ALIGNER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as `with_env_overrides`, reading variables through `get_env`.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(value) = get_env("ALIGNER_THRESHOLD") {
        match value.trim().parse::<f64>() {
            Ok(threshold) => config.scoring.threshold = threshold,
            Err(_) => warn!(value = %value, "ignoring non-numeric ALIGNER_THRESHOLD"),
        }
    }

    if let Some(value) = get_env("ALIGNER_BASE_OFFSET") {
        match value.trim().parse::<f64>() {
            Ok(offset) => config.scoring.base_offset = offset,
            Err(_) => warn!(value = %value, "ignoring non-numeric ALIGNER_BASE_OFFSET"),
        }
    }

    // Comma-separated, leading dot optional
    if let Some(value) = get_env("ALIGNER_EXTENSIONS") {
        let parsed: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                if s.starts_with('.') {
                    s.to_string()
                } else {
                    format!(".{}", s)
                }
            })
            .collect();
        if !parsed.is_empty() {
            config.scan.extensions = parsed;
        }
    }

    config
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aligner").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "scoring",
        "threshold",
        "base_offset",
        "scan",
        "extensions",
        "ignore",
        "vocabulary",
        "keywords",
        "domain_specific_keywords",
        "domain_specific_symbol_terms",
        "objectives",
        "pattern",
        "tag",
        "domains",
        "domain",
        "patterns",
        "technologies",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
