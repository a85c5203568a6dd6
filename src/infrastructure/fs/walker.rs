//! Local project walker
//!
//! Implements `ProjectSource` over the local disk using the `ignore` crate's
//! walker with git-specific filtering turned off. Symlinked files are
//! listed; symlinked directories are not descended. Entries whose name
//! contains a configured ignore name are pruned, as is anything matched by
//! `.alignerignore`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::domain::ports::ProjectSource;
use crate::domain::value_objects::IgnorePatterns;
use crate::error::{AlignerError, AlignerResult};

#[derive(Debug, Clone)]
pub struct LocalProjectSource {
    ignored_names: Arc<Vec<String>>,
}

impl LocalProjectSource {
    pub fn new(ignored_names: Vec<String>) -> Self {
        Self {
            ignored_names: Arc::new(ignored_names),
        }
    }

    /// Substring match against a single path component.
    pub fn is_ignored_name(&self, name: &str) -> bool {
        name_is_ignored(&self.ignored_names, name)
    }
}

fn name_is_ignored(ignored: &[String], name: &str) -> bool {
    ignored
        .iter()
        .any(|pattern| !pattern.is_empty() && name.contains(pattern.as_str()))
}

fn check_root(root: &Path) -> AlignerResult<()> {
    let metadata = std::fs::metadata(root).map_err(|source| AlignerError::Traversal {
        path: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(AlignerError::NotADirectory {
            path: root.to_path_buf(),
        });
    }
    std::fs::read_dir(root).map_err(|source| AlignerError::Traversal {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(())
}

impl ProjectSource for LocalProjectSource {
    fn list_files(&self, root: &Path) -> AlignerResult<Vec<PathBuf>> {
        check_root(root)?;

        let patterns = IgnorePatterns::load(root).unwrap_or_else(|err| {
            warn!(error = %err, "ignoring malformed .alignerignore");
            IgnorePatterns::empty()
        });

        let ignored = Arc::clone(&self.ignored_names);
        let walk_root = root.to_path_buf();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                if entry.depth() == 0 {
                    return true;
                }
                let name = entry.file_name().to_string_lossy();
                if name_is_ignored(&ignored, &name) {
                    return false;
                }
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                match entry.path().strip_prefix(&walk_root) {
                    Ok(rel) => !patterns.is_ignored(rel, is_dir),
                    Err(_) => true,
                }
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    // file symlinks are read through; directory symlinks are not descended
                    if file_type.is_file() || (file_type.is_symlink() && entry.path().is_file()) {
                        files.push(entry.into_path());
                    }
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                }
            }
        }

        debug!(root = %root.display(), files = files.len(), "listed project files");
        Ok(files)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
