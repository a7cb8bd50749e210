//! Unified error types for grooves
//!
//! Error strategy:
//! - Configuration and safety errors: Fatal, reported before any output is written
//! - Destination collisions: Fatal by default, recoverable with `--skip-existing`
//! - I/O errors: Fatal, abort the run (already-copied files stay in place)

use std::path::PathBuf;
use thiserror::Error;

/// Extensions the safety gate accepts, for diagnostics
pub const ALLOWED_EXTENSIONS_HINT: &str = "(none), .mid, .head, .txt";

/// Top-level error type for grooves operations
#[derive(Debug, Error)]
pub enum GroovesError {
    // =========================================================================
    // Configuration errors - nothing has been touched yet
    // =========================================================================
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    // =========================================================================
    // Safety violations - the source tree does not look like a MIDI folder
    // =========================================================================
    #[error("There are no midi files in '{root}'\n  Tip: Point midifolder= at the folder containing your .mid grooves")]
    NoTargetFiles { root: PathBuf },

    #[error("Foreign filetype found: '{extension}' (e.g. '{example}')\n  Further work may remove your files, so we're exiting.\n  Allowed filetypes: {ALLOWED_EXTENSIONS_HINT}")]
    ForeignFileType { extension: String, example: PathBuf },

    // =========================================================================
    // Per-file errors
    // =========================================================================
    #[error("Destination already exists: '{path}'\n  Tip: Remove the previous output or rerun with --skip-existing")]
    DestinationCollision { path: PathBuf },

    #[error("Cannot classify '{path}': {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    // =========================================================================
    // I/O errors - abort the run
    // =========================================================================
    #[error("Failed to scan '{path}': {reason}")]
    Scan { path: PathBuf, reason: String },

    #[error("Cannot write output to '{path}': {reason}\n  Tip: Check write permissions for the output directory")]
    OutputError { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for grooves operations
pub type Result<T> = std::result::Result<T, GroovesError>;

impl GroovesError {
    /// Returns true if the run may skip the offending file and continue,
    /// provided the collision policy allows it
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GroovesError::DestinationCollision { .. })
    }

    /// Returns true for errors raised by the safety gate
    pub fn is_safety_violation(&self) -> bool {
        matches!(
            self,
            GroovesError::NoTargetFiles { .. } | GroovesError::ForeignFileType { .. }
        )
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        GroovesError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an output error, checking for common issues
    pub fn output_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        let reason = match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                format!("Permission denied. Check that you have write access to {}", path.display())
            }
            std::io::ErrorKind::NotFound => {
                format!("Directory does not exist: {}", path.parent().map(|p| p.display().to_string()).unwrap_or_default())
            }
            std::io::ErrorKind::AlreadyExists => {
                format!("File already exists: {}", path.display())
            }
            _ => err.to_string(),
        };
        GroovesError::OutputError { path, reason }
    }
}
