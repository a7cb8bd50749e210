//! Runtime configuration settings

use crate::error::{GroovesError, Result};
use std::path::{Path, PathBuf};

/// Name of the default output folder, created next to the source folder
pub const DEFAULT_OUTPUT_DIR: &str = "Grooves";

/// Name of the append-only copy log inside the output folder
pub const LOG_FILE_NAME: &str = "log.txt";

/// What to do when a destination file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Stop the run with an error
    #[default]
    Abort,
    /// Warn, leave the existing file alone, and continue
    Skip,
}

/// Runtime settings for a reorganization run
#[derive(Debug, Clone)]
pub struct Settings {
    /// Source folder scanned for MIDI files
    pub source_root: PathBuf,
    /// Root of the library/song/part hierarchy
    pub output_root: PathBuf,
    /// Behavior on destination collisions
    pub on_collision: CollisionPolicy,
    /// Show progress bars
    pub show_progress: bool,
    /// Dry run mode - plan without copying
    pub dry_run: bool,
}

impl Settings {
    /// Settings for `source_root` with the default output folder and policies
    ///
    /// The source must be an existing directory; it is canonicalized so that
    /// depth arithmetic works for relative paths too.
    pub fn new(source_root: &Path) -> Result<Self> {
        let source_root = resolve_source(source_root)?;
        let output_root = default_output_root(&source_root)?;
        ensure_outside_source(&source_root, &output_root)?;

        Ok(Self {
            source_root,
            output_root,
            on_collision: CollisionPolicy::Abort,
            show_progress: true,
            dry_run: false,
        })
    }

    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::Cli) -> Result<Self> {
        let mut settings = Self::new(&cli.midifolder)?;

        if let Some(output) = &cli.output {
            ensure_outside_source(&settings.source_root, output)?;
            settings.output_root = output.clone();
        }
        if cli.skip_existing {
            settings.on_collision = CollisionPolicy::Skip;
        }
        settings.show_progress = !cli.quiet;
        settings.dry_run = cli.dry_run;

        Ok(settings)
    }

    /// Path of the copy log
    pub fn log_path(&self) -> PathBuf {
        self.output_root.join(LOG_FILE_NAME)
    }

    /// Check that the output root does not lie inside the source folder
    pub fn validate(&self) -> Result<()> {
        ensure_outside_source(&self.source_root, &self.output_root)
    }
}

/// Reject an output root equal to, or nested inside, the source folder
///
/// Copies written there would be scanned as input by the next run.
fn ensure_outside_source(source_root: &Path, output_root: &Path) -> Result<()> {
    let source = source_root.canonicalize().map_err(|_| {
        GroovesError::ConfigError(format!(
            "This directory does not exist: {}",
            source_root.display()
        ))
    })?;
    let output = resolve_existing_prefix(output_root)?;

    if output.starts_with(&source) {
        return Err(GroovesError::ConfigError(format!(
            "Output folder {} is inside the source folder {}; pass --output to pick another location",
            output_root.display(),
            source_root.display()
        )));
    }

    Ok(())
}

/// Canonicalize the deepest existing ancestor of `path` and re-append the rest
fn resolve_existing_prefix(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    for ancestor in absolute.ancestors() {
        if let Ok(resolved) = ancestor.canonicalize() {
            let rest = absolute.strip_prefix(ancestor).unwrap_or(Path::new(""));
            return Ok(resolved.join(rest));
        }
    }

    Ok(absolute)
}

fn resolve_source(path: &Path) -> Result<PathBuf> {
    let resolved = path.canonicalize().map_err(|_| {
        GroovesError::ConfigError(format!("This directory does not exist: {}", path.display()))
    })?;

    if !resolved.is_dir() {
        return Err(GroovesError::ConfigError(format!(
            "Not a directory: {}",
            path.display()
        )));
    }

    Ok(resolved)
}

/// `<parent-of-source>/Grooves`
fn default_output_root(source_root: &Path) -> Result<PathBuf> {
    let parent = source_root.parent().ok_or_else(|| {
        GroovesError::ConfigError(format!(
            "Source folder {} has no parent to hold the {} folder; pass --output",
            source_root.display(),
            DEFAULT_OUTPUT_DIR
        ))
    })?;

    Ok(parent.join(DEFAULT_OUTPUT_DIR))
}
