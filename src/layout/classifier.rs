//! Library/song/part classification by depth
//!
//! The authoring tool nests part folders inside song folders inside library
//! folders. Shallower trees still get a full three-level destination: the
//! missing grouping names are synthesized from the deepest directory that
//! does exist.
//!
//! | Depth | library                | song             | part   |
//! |-------|------------------------|------------------|--------|
//! | > 2   | great-grandparent      | grandparent      | parent |
//! | 2     | grandparent`_library`  | grandparent      | parent |
//! | 1     | parent`_library`       | parent`_song`    | parent |
//! | 0     | skip                   |                  |        |

use crate::error::{GroovesError, Result};
use crate::types::{ClassifiedIdentifiers, Classification, Slot};
use std::borrow::Cow;
use std::path::Path;

/// Classify a file given its depth below the source root
pub fn classify(file: &Path, depth: usize) -> Result<Classification> {
    if depth == 0 {
        return Ok(Classification::Skip);
    }

    let parent = ancestor_name(file, 1)?;

    let ids = match depth {
        1 => ClassifiedIdentifiers::new(
            Slot::Library.synthesize(&parent),
            Slot::Song.synthesize(&parent),
            parent,
        ),
        2 => {
            let grandparent = ancestor_name(file, 2)?;
            ClassifiedIdentifiers::new(
                Slot::Library.synthesize(&grandparent),
                grandparent,
                parent,
            )
        }
        _ => {
            let grandparent = ancestor_name(file, 2)?;
            let great_grandparent = ancestor_name(file, 3)?;
            ClassifiedIdentifiers::new(great_grandparent, grandparent, parent)
        }
    };

    Ok(Classification::Classified(ids))
}

/// Name of the directory `levels` steps above `file` (1 = containing directory)
///
/// Names that are not valid UTF-8 are converted lossily, so they still classify.
fn ancestor_name(file: &Path, levels: usize) -> Result<Cow<'_, str>> {
    let ancestor = file.ancestors().nth(levels).ok_or_else(|| {
        GroovesError::invalid_path(file, format!("has fewer than {} parent directories", levels))
    })?;

    let name = ancestor.file_name().ok_or_else(|| {
        GroovesError::invalid_path(file, format!("'{}' has no directory name", ancestor.display()))
    })?;

    Ok(name.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classified(file: &str, depth: usize) -> ClassifiedIdentifiers {
        match classify(Path::new(file), depth).unwrap() {
            Classification::Classified(ids) => ids,
            Classification::Skip => panic!("{} at depth {} should not be skipped", file, depth),
        }
    }

    #[test]
    fn test_depth_zero_is_skipped() {
        let result = classify(Path::new("/midi"), 0).unwrap();
        assert_eq!(result, Classification::Skip);
    }

    #[test]
    fn test_deep_file_uses_real_ancestors() {
        let ids = classified("/midi/Funk Lib/Song A/Drums/kick.mid", 4);
        assert_eq!(ids, ClassifiedIdentifiers::new("Funk Lib", "Song A", "Drums"));
    }

    #[test]
    fn test_very_deep_file_uses_three_nearest_ancestors() {
        let ids = classified("/midi/extra/Lib/Song/Part/groove.mid", 5);
        assert_eq!(ids, ClassifiedIdentifiers::new("Lib", "Song", "Part"));
    }

    #[test]
    fn test_depth_three_file() {
        // root/Song/Part/x.mid: the root's own name becomes the library
        let ids = classified("/home/me/MIDI/Song/Part/x.mid", 3);
        assert_eq!(ids, ClassifiedIdentifiers::new("MIDI", "Song", "Part"));
    }

    #[test]
    fn test_depth_two_synthesizes_library() {
        let ids = classified("/midi/Song/Part/x.mid", 2);
        assert_eq!(ids, ClassifiedIdentifiers::new("Song_library", "Song", "Part"));
    }

    #[test]
    fn test_depth_one_synthesizes_library_and_song() {
        let ids = classified("/home/me/MIDI/track.mid", 1);
        assert_eq!(ids, ClassifiedIdentifiers::new("MIDI_library", "MIDI_song", "MIDI"));
    }

    #[test]
    fn test_filename_does_not_affect_identifiers() {
        let a = classified("/midi/Lib/Song/Part/one.mid", 4);
        let b = classified("/midi/Lib/Song/Part/two.MID", 4);
        assert_eq!(a, b);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_directory_name_still_classifies() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let file = Path::new("/midi/Lib")
            .join(OsStr::from_bytes(b"Song\xff"))
            .join("Part/track.mid");
        match classify(&file, 4).unwrap() {
            Classification::Classified(ids) => {
                assert_eq!(ids.library, "Lib");
                assert_eq!(ids.song, "Song\u{FFFD}");
                assert_eq!(ids.part, "Part");
            }
            Classification::Skip => panic!("should not be skipped"),
        }
    }

    #[test]
    fn test_missing_ancestor_is_an_error() {
        let err = classify(Path::new("/x.mid"), 1).unwrap_err();
        assert!(matches!(err, GroovesError::InvalidPath { .. }));
    }
}
