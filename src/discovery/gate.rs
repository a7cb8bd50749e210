//! Safety gate
//!
//! Refuses to run on a tree that does not look like an authoring tool's MIDI
//! folder: there must be at least one `.mid` file and nothing outside the
//! extension allow-list.

use crate::error::{GroovesError, Result};
use crate::types::{extension_of, is_allowed_extension, is_target};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What the gate found while validating a file list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    /// Number of files inspected
    pub total_files: usize,
    /// Number of `.mid` files
    pub target_files: usize,
    /// First `.mid` file in discovery order
    pub first_target: PathBuf,
    /// Distinct lower-cased extensions in discovery order (`""` = none)
    pub extensions: Vec<String>,
}

/// Validate a discovered file list before anything is written
pub fn check(root: &Path, files: &[PathBuf]) -> Result<GateReport> {
    let first_target = files
        .iter()
        .find(|f| is_target(f))
        .cloned()
        .ok_or_else(|| GroovesError::NoTargetFiles {
            root: root.to_path_buf(),
        })?;
    debug!("First midi file: {}", first_target.display());

    let mut extensions: Vec<String> = Vec::new();
    let mut first_seen: Vec<&PathBuf> = Vec::new();
    for file in files {
        let ext = extension_of(file);
        if !extensions.contains(&ext) {
            extensions.push(ext);
            first_seen.push(file);
        }
    }
    debug!("Found filetypes: {:?}", extensions);

    if let Some((ext, example)) = extensions
        .iter()
        .zip(first_seen)
        .find(|(ext, _)| !is_allowed_extension(ext))
    {
        debug!("Foreign filetype {} in {}", ext, example.display());
        return Err(GroovesError::ForeignFileType {
            extension: ext.clone(),
            example: example.clone(),
        });
    }

    Ok(GateReport {
        total_files: files.len(),
        target_files: files.iter().filter(|f| is_target(f)).count(),
        first_target,
        extensions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_accepts_typical_tree() {
        let files = paths(&[
            "/midi/Lib/info.txt",
            "/midi/Lib/Song/song.head",
            "/midi/Lib/Song/Part/a.mid",
            "/midi/Lib/Song/Part/B.MID",
            "/midi/Lib/Song/Part/README",
        ]);
        let report = check(Path::new("/midi"), &files).unwrap();
        assert_eq!(report.total_files, 5);
        assert_eq!(report.target_files, 2);
        assert_eq!(report.first_target, PathBuf::from("/midi/Lib/Song/Part/a.mid"));
        assert_eq!(report.extensions, vec![".txt", ".head", ".mid", ""]);
    }

    #[test]
    fn test_rejects_tree_without_midi() {
        let files = paths(&["/midi/readme.txt", "/midi/a.head"]);
        let err = check(Path::new("/midi"), &files).unwrap_err();
        assert!(matches!(err, GroovesError::NoTargetFiles { .. }));
    }

    #[test]
    fn test_rejects_empty_tree() {
        let err = check(Path::new("/midi"), &[]).unwrap_err();
        assert!(matches!(err, GroovesError::NoTargetFiles { .. }));
    }

    #[test]
    fn test_rejects_foreign_extension() {
        let files = paths(&["/midi/a.mid", "/midi/photo.JPG", "/midi/other.xyz"]);
        let err = check(Path::new("/midi"), &files).unwrap_err();
        match err {
            GroovesError::ForeignFileType { extension, example } => {
                assert_eq!(extension, ".jpg");
                assert_eq!(example, PathBuf::from("/midi/photo.JPG"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    #[traced_test]
    fn test_foreign_extension_is_only_logged_at_debug() {
        let files = paths(&["/midi/a.mid", "/midi/other.xyz"]);
        assert!(check(Path::new("/midi"), &files).is_err());
        assert!(logs_contain("Foreign filetype .xyz"));
        assert!(!logs_contain("WARN"));
    }

    #[test]
    fn test_missing_midi_reported_before_foreign_files() {
        let files = paths(&["/midi/other.xyz"]);
        let err = check(Path::new("/midi"), &files).unwrap_err();
        assert!(matches!(err, GroovesError::NoTargetFiles { .. }));
    }
}
