//! grooves - Reorganize MIDI groove folders into a library/song/part hierarchy
//!
//! Music authoring tools ship MIDI grooves in folder trees of varying depth.
//! grooves copies every `.mid` file into a uniform
//! `<library>.lib/<song>.sng/<part>.prt/` layout under a new output folder,
//! after checking that the source folder holds nothing but MIDI-tool files.
//!
//! # Architecture
//!
//! - `config`: CLI argument parsing and runtime settings
//! - `discovery`: Recursive file scanning and the pre-flight safety gate
//! - `layout`: Depth calculation, classification, name normalization, destination paths
//! - `pipeline`: Orchestration, exclusive copies, and the copy log
//!
//! # Example
//!
//! ```no_run
//! use grooves::{config::Settings, pipeline};
//! use std::path::Path;
//!
//! let settings = Settings::new(Path::new("/Users/me/MIDI")).expect("Invalid source folder");
//! let result = pipeline::run(&settings).expect("Reorganization failed");
//! println!("Copied {} files", result.copied);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod types;

// Re-export key types at crate root
pub use error::{GroovesError, Result};
pub use types::{ClassifiedIdentifiers, Classification, Slot};
