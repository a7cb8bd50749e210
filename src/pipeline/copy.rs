//! Exclusive file copies and the numbered copy log

use crate::error::{GroovesError, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Copy `source` to `destination`, never replacing an existing file
///
/// Parent directories are created as needed. If `destination` already exists
/// the copy fails with [`GroovesError::DestinationCollision`] and the existing
/// file is left untouched. Returns the number of bytes copied.
pub fn copy_exclusive(source: &Path, destination: &Path) -> Result<u64> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| GroovesError::output_error(parent, e))?;
    }

    let mut reader = File::open(source)?;

    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => GroovesError::DestinationCollision {
                path: destination.to_path_buf(),
            },
            _ => GroovesError::output_error(destination, e),
        })?;

    match io::copy(&mut reader, &mut writer) {
        Ok(bytes) => Ok(bytes),
        Err(e) => {
            // Don't leave a truncated file behind to collide with on the next run
            drop(writer);
            if let Err(cleanup) = fs::remove_file(destination) {
                debug!("Could not remove partial {}: {}", destination.display(), cleanup);
            }
            Err(GroovesError::output_error(destination, e))
        }
    }
}

/// Append-only log of copied files, one `"<n> : <path>"` line per copy
#[derive(Debug)]
pub struct CopyLog {
    path: PathBuf,
    file: File,
    counter: usize,
}

impl CopyLog {
    /// Open (or create) the log in append mode
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| GroovesError::output_error(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            counter: 0,
        })
    }

    /// Record a successful copy and return its sequence number (starting at 1)
    pub fn record(&mut self, destination: &Path) -> Result<usize> {
        self.counter += 1;
        writeln!(self.file, "{} : {}", self.counter, destination.display())
            .map_err(|e| GroovesError::output_error(&self.path, e))?;
        Ok(self.counter)
    }

    /// Number of copies recorded by this run
    pub fn count(&self) -> usize {
        self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_creates_parents_and_copies_bytes() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("track.mid");
        fs::write(&source, b"MThd\x00\x00\x00\x06").unwrap();

        let dest = dir.path().join("out/a.lib/b.sng/c.prt/track.mid");
        let bytes = copy_exclusive(&source, &dest).unwrap();

        assert_eq!(bytes, 8);
        assert_eq!(fs::read(&dest).unwrap(), b"MThd\x00\x00\x00\x06");
    }

    #[test]
    fn test_copy_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("track.mid");
        fs::write(&source, b"new").unwrap();
        let dest = dir.path().join("existing.mid");
        fs::write(&dest, b"old").unwrap();

        let err = copy_exclusive(&source, &dest).unwrap_err();
        assert!(matches!(err, GroovesError::DestinationCollision { .. }));
        assert_eq!(fs::read(&dest).unwrap(), b"old");
    }

    #[test]
    fn test_copy_missing_source_leaves_no_destination() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("out/track.mid");
        assert!(copy_exclusive(&dir.path().join("missing.mid"), &dest).is_err());
        assert!(!dest.exists());
    }

    #[test]
    fn test_log_numbers_lines_and_appends() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("log.txt");
        fs::write(&log_path, "1 : /earlier/run.mid\n").unwrap();

        let mut log = CopyLog::open(&log_path).unwrap();
        assert_eq!(log.record(Path::new("/out/a.mid")).unwrap(), 1);
        assert_eq!(log.record(Path::new("/out/b.mid")).unwrap(), 2);
        assert_eq!(log.count(), 2);
        drop(log);

        let contents = fs::read_to_string(&log_path).unwrap();
        assert_eq!(
            contents,
            "1 : /earlier/run.mid\n1 : /out/a.mid\n2 : /out/b.mid\n"
        );
    }
}
