//! File discovery and scanning

use crate::error::{GroovesError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Recursively list every file under `root`
///
/// Anything that is not a directory counts as a file; symlinks are listed
/// but not followed. Entries come back sorted by file name within each
/// directory so runs are reproducible. Any traversal error aborts the scan.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(GroovesError::ConfigError(format!(
            "Source path is not a directory: {}",
            root.display()
        )));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| GroovesError::Scan {
            path: e.path().unwrap_or(root).to_path_buf(),
            reason: e.to_string(),
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        debug!("Discovered: {}", entry.path().display());
        files.push(entry.into_path());
    }

    info!("Discovered {} files in {}", files.len(), root.display());

    Ok(files)
}
