//! Depth of a file below the source root

use crate::error::{GroovesError, Result};
use std::path::Path;

/// Number of path components separating `file` from `root`
///
/// A file sitting directly inside `root` has depth 1. The count is taken over
/// `Path::components`, so redundant separators and trailing slashes do not
/// change the result.
///
/// Fails with [`GroovesError::InvalidPath`] if `file` does not lie under `root`.
pub fn depth(file: &Path, root: &Path) -> Result<usize> {
    if !file.starts_with(root) {
        return Err(GroovesError::invalid_path(
            file,
            format!("not inside source root {}", root.display()),
        ));
    }

    Ok(file.components().count() - root.components().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_child_is_depth_one() {
        let root = Path::new("/home/user/MIDI");
        assert_eq!(depth(Path::new("/home/user/MIDI/track.mid"), root).unwrap(), 1);
    }

    #[test]
    fn test_nested_depths() {
        let root = Path::new("/home/user/MIDI");
        assert_eq!(depth(Path::new("/home/user/MIDI/Song/track.mid"), root).unwrap(), 2);
        assert_eq!(
            depth(Path::new("/home/user/MIDI/Lib/Song/Part/track.mid"), root).unwrap(),
            4
        );
        assert_eq!(
            depth(Path::new("/home/user/MIDI/a/b/c/d/e/track.mid"), root).unwrap(),
            6
        );
    }

    #[test]
    fn test_root_itself_is_depth_zero() {
        let root = Path::new("/home/user/MIDI");
        assert_eq!(depth(root, root).unwrap(), 0);
    }

    #[test]
    fn test_trailing_separator_on_root_is_ignored() {
        let root = Path::new("/home/user/MIDI/");
        assert_eq!(depth(Path::new("/home/user/MIDI/Song/track.mid"), root).unwrap(), 2);
    }

    #[test]
    fn test_file_outside_root_is_rejected() {
        let root = Path::new("/home/user/MIDI");
        let err = depth(Path::new("/home/user/Other/track.mid"), root).unwrap_err();
        assert!(matches!(err, GroovesError::InvalidPath { .. }));

        // Shares a string prefix but not a component prefix
        let err = depth(Path::new("/home/user/MIDI2/track.mid"), root).unwrap_err();
        assert!(matches!(err, GroovesError::InvalidPath { .. }));
    }
}
