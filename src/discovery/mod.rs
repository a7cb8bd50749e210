//! File discovery and pre-flight validation

pub mod gate;
pub mod scanner;

pub use gate::{check, GateReport};
pub use scanner::scan;
