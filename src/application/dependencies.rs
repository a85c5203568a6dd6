//! Project-level dependency discovery
//!
//! Reads `package.json` and `requirements.txt` at the project root. Missing
//! or malformed manifests contribute nothing.

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::domain::ports::ProjectSource;

const PACKAGE_JSON: &str = "package.json";
const REQUIREMENTS_TXT: &str = "requirements.txt";

/// npm dependencies (runtime, then dev) followed by pip requirements,
/// first occurrence kept.
pub fn discover_dependencies<S: ProjectSource>(source: &S, root: &Path) -> Vec<String> {
    let mut names = Vec::new();

    if let Ok(content) = source.read_to_string(&root.join(PACKAGE_JSON)) {
        names.extend(package_json_dependencies(&content));
    }
    if let Ok(content) = source.read_to_string(&root.join(REQUIREMENTS_TXT)) {
        names.extend(requirements_txt_dependencies(&content));
    }

    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}

/// Keys of `dependencies` then `devDependencies`.
pub fn package_json_dependencies(content: &str) -> Vec<String> {
    let manifest: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(err) => {
            debug!(error = %err, "unparseable package.json");
            return Vec::new();
        }
    };

    ["dependencies", "devDependencies"]
        .iter()
        .filter_map(|section| manifest.get(section).and_then(Value::as_object))
        .flat_map(|deps| deps.keys().cloned())
        .collect()
}

/// Package names, with `==` and `>=` version pins cut off.
pub fn requirements_txt_dependencies(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let name = line.split("==").next().unwrap_or(line);
            let name = name.split(">=").next().unwrap_or(name).trim();
            (!name.is_empty()).then(|| name.to_string())
        })
        .collect()
}
