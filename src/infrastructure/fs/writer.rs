//! Atomic file writer
//!
//! Writes go to a temp file in the destination directory which is then
//! renamed over the target, so readers never observe a partial report.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::AlignerResult;

pub fn atomic_write(path: &Path, content: &[u8]) -> AlignerResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
