//! Core data types for grooves
//!
//! These types represent the domain model and flow through the pipeline.

use std::path::{Path, PathBuf};

// =============================================================================
// Grouping slots
// =============================================================================

/// One level of the library/song/part output hierarchy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Library,
    Song,
    Part,
}

impl Slot {
    /// Extension appended to the normalized directory name (e.g. `drums.prt`)
    pub fn dir_suffix(self) -> &'static str {
        match self {
            Slot::Library => "lib",
            Slot::Song => "sng",
            Slot::Part => "prt",
        }
    }

    /// Suffix used when a shallow tree forces the name to be synthesized
    pub fn synthesized_suffix(self) -> &'static str {
        match self {
            Slot::Library => "_library",
            Slot::Song => "_song",
            // part is always the real parent directory
            Slot::Part => "",
        }
    }

    /// Synthesize a grouping name from the nearest known ancestor
    pub fn synthesize(self, ancestor: &str) -> String {
        format!("{}{}", ancestor, self.synthesized_suffix())
    }
}

// =============================================================================
// Classification results
// =============================================================================

/// Raw (not yet normalized) grouping names for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedIdentifiers {
    pub library: String,
    pub song: String,
    pub part: String,
}

impl ClassifiedIdentifiers {
    pub fn new(
        library: impl Into<String>,
        song: impl Into<String>,
        part: impl Into<String>,
    ) -> Self {
        Self {
            library: library.into(),
            song: song.into(),
            part: part.into(),
        }
    }

    /// Name held in the given slot
    pub fn get(&self, slot: Slot) -> &str {
        match slot {
            Slot::Library => &self.library,
            Slot::Song => &self.song,
            Slot::Part => &self.part,
        }
    }

    /// Apply a transform to every slot
    pub fn map(&self, f: impl Fn(&str) -> String) -> Self {
        Self {
            library: f(&self.library),
            song: f(&self.song),
            part: f(&self.part),
        }
    }
}

/// Outcome of classifying a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The file has a place in the output hierarchy
    Classified(ClassifiedIdentifiers),
    /// The file lies at or above the source root; do not copy, count, or log it
    Skip,
}

// =============================================================================
// Supported formats
// =============================================================================

/// Extension of the files that get relocated
pub const TARGET_EXTENSION: &str = ".mid";

/// Extensions the safety gate tolerates; the empty string means "no extension"
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["", ".mid", ".head", ".txt"];

/// Lower-cased extension of a path with its leading dot, or `""` if it has none
pub fn extension_of(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}

/// Check whether a path is a MIDI file (case-insensitive)
pub fn is_target(path: &Path) -> bool {
    extension_of(path) == TARGET_EXTENSION
}

/// Check whether an extension (as returned by [`extension_of`]) is on the allow-list
pub fn is_allowed_extension(extension: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension)
}

// =============================================================================
// Planned copies
// =============================================================================

/// A target file together with where it will be copied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCopy {
    pub source: PathBuf,
    pub destination: PathBuf,
}
