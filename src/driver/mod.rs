/// Command templates and per-run records
pub mod invocation;
/// Shared append-only run log
pub mod log;
/// Sequential run driver
pub mod runner;
