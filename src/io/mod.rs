/// Command-line interface and sweep orchestration
pub mod cli;
/// Axis names, flags, and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress counter and displays
pub mod progress;
/// Sweep settings and settings files
pub mod settings;
