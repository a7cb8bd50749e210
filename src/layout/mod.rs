//! Path classification and remapping
//!
//! Maps a file under the source root to its place in the normalized
//! `library.lib/song.sng/part.prt` hierarchy under the output root.
//! Everything here is pure: no filesystem access.

pub mod classifier;
pub mod depth;
pub mod destination;
pub mod normalize;

pub use classifier::classify;
pub use depth::depth;
pub use destination::build_destination;
pub use normalize::normalize;

use crate::error::{GroovesError, Result};
use crate::types::Classification;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Source and output roots for one run
#[derive(Debug, Clone)]
pub struct Layout {
    source_root: PathBuf,
    output_root: PathBuf,
}

impl Layout {
    pub fn new(source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            output_root: output_root.into(),
        }
    }

    /// Destination for `file`, or `None` if the file must be skipped
    pub fn destination_for(&self, file: &Path) -> Result<Option<PathBuf>> {
        let depth = depth(file, &self.source_root)?;

        let ids = match classify(file, depth)? {
            Classification::Classified(ids) => ids,
            Classification::Skip => {
                trace!("Skipping {} (depth {})", file.display(), depth);
                return Ok(None);
            }
        };

        let filename = file
            .file_name()
            .ok_or_else(|| GroovesError::invalid_path(file, "has no file name"))?;

        let normalized = ids.map(normalize);
        trace!(
            "{} (depth {}) -> {:?} -> {:?}",
            file.display(),
            depth,
            ids,
            normalized
        );

        Ok(Some(build_destination(&self.output_root, &normalized, filename)))
    }
}
