//! Destination path assembly

use crate::types::{ClassifiedIdentifiers, Slot};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Build `output_root/<library>.lib/<song>.sng/<part>.prt/<filename>`
///
/// `ids` must already be normalized. No I/O is performed; whether the path is
/// free is decided at copy time.
pub fn build_destination(
    output_root: &Path,
    ids: &ClassifiedIdentifiers,
    filename: &OsStr,
) -> PathBuf {
    let mut path = output_root.to_path_buf();
    for slot in [Slot::Library, Slot::Song, Slot::Part] {
        path.push(format!("{}.{}", ids.get(slot), slot.dir_suffix()));
    }
    path.push(filename);
    path
}
