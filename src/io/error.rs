//! Error types for sweep declaration, logging, and process launch

use std::fmt;
use std::path::PathBuf;

/// Main error type for all sweep operations
///
/// Every variant is fatal for the sweep. Failures of an individual benchmark
/// run are never reported here; they only show up in the run log.
#[derive(Debug)]
pub enum SweepError {
    /// Sweep declared without any axes
    EmptyDeclaration,

    /// Two axes share the same name
    DuplicateAxis {
        /// Name declared more than once
        name: String,
    },

    /// An axis lists the same value twice
    DuplicateValue {
        /// Axis holding the repeated value
        axis: String,
        /// The repeated value
        value: String,
    },

    /// A predicate, template, or dependent axis refers to an axis that is not declared
    UnknownAxis {
        /// Name of the missing axis
        axis: String,
        /// What referenced it
        referenced_by: String,
    },

    /// Building a command line needed an axis the configuration does not bind
    MissingBinding {
        /// Axis that was not bound
        axis: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Settings file could not be read or parsed
    Settings {
        /// Path of the settings file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// Shared run log could not be opened or written
    LogFile {
        /// Path of the log file
        path: PathBuf,
        /// Operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Benchmark executable could not be started at all
    Launch {
        /// Program that failed to start
        program: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDeclaration => write!(f, "Sweep declares no axes"),
            Self::DuplicateAxis { name } => write!(f, "Axis '{name}' is declared more than once"),
            Self::DuplicateValue { axis, value } => {
                write!(f, "Axis '{axis}' lists value '{value}' more than once")
            }
            Self::UnknownAxis {
                axis,
                referenced_by,
            } => {
                write!(
                    f,
                    "Unknown axis '{axis}' referenced by {referenced_by}"
                )
            }
            Self::MissingBinding { axis } => {
                write!(f, "Configuration has no value for axis '{axis}'")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Settings { path, reason } => {
                write!(f, "Invalid settings file '{}': {reason}", path.display())
            }
            Self::LogFile {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "Log file error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Launch { program, source } => {
                write!(f, "Failed to launch '{}': {source}", program.display())
            }
        }
    }
}

impl std::error::Error for SweepError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LogFile { source, .. } | Self::Launch { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for sweep results
pub type Result<T> = std::result::Result<T, SweepError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SweepError {
    SweepError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an unknown axis error
pub fn unknown_axis(axis: &str, referenced_by: &impl ToString) -> SweepError {
    SweepError::UnknownAxis {
        axis: axis.to_string(),
        referenced_by: referenced_by.to_string(),
    }
}
