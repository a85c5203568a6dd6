//! ProjectSource port - where project files and their contents come from
//!
//! Implementations:
//! - `LocalProjectSource` - walks the local disk
//! - `MockProjectSource` - in-memory, for tests

use std::path::{Path, PathBuf};

use crate::error::AlignerResult;

pub trait ProjectSource {
    /// Every candidate file under `root`, in a deterministic order.
    ///
    /// Fails only when `root` itself cannot be listed. Unreadable
    /// subdirectories are skipped.
    fn list_files(&self, root: &Path) -> AlignerResult<Vec<PathBuf>>;

    /// Read a file as text. Invalid UTF-8 is replaced, not rejected.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

/// In-memory project for testing. Files are listed in insertion order.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MockProjectSource {
    pub root: PathBuf,
    pub files: Vec<(PathBuf, String)>,
    pub unreadable: Vec<PathBuf>,
}

#[cfg(test)]
impl MockProjectSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, rel: &str, content: &str) -> Self {
        self.files.push((self.root.join(rel), content.to_string()));
        self
    }

    /// Listed by traversal but failing on read.
    pub fn with_unreadable(mut self, rel: &str) -> Self {
        let path = self.root.join(rel);
        self.files.push((path.clone(), String::new()));
        self.unreadable.push(path);
        self
    }
}

#[cfg(test)]
impl ProjectSource for MockProjectSource {
    fn list_files(&self, root: &Path) -> AlignerResult<Vec<PathBuf>> {
        if root != self.root {
            return Err(crate::error::AlignerError::Traversal {
                path: root.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            });
        }
        Ok(self.files.iter().map(|(p, _)| p.clone()).collect())
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.clone())
            .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"))
    }
}
