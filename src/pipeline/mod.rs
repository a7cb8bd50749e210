//! Reorganization pipeline

pub mod copy;
pub mod orchestrator;

pub use copy::{copy_exclusive, CopyLog};
pub use orchestrator::{plan_copies, run, PipelineResult};
