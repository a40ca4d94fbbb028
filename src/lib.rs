//! Parameter sweep generation and execution for the LBM benchmark
//!
//! The sweep enumerator walks the cross product of named axes in a fixed
//! order, pruning combinations rejected by exclusion predicates. The run
//! driver launches the benchmark once per surviving configuration, appends
//! every command line and its output to a shared log, and reports progress.

#![forbid(unsafe_code)]

/// Sequential run driver, command construction, and the shared run log
pub mod driver;
/// Command-line interface, configuration, errors, and progress display
pub mod io;
/// Axes, configurations, exclusion predicates, and enumeration
pub mod sweep;

pub use io::error::{Result, SweepError};
