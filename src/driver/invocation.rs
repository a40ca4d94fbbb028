//! Mapping from configurations to benchmark command lines

use crate::io::error::{Result, SweepError};
use crate::sweep::configuration::Configuration;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// One entry of the benchmark argument list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentSpec {
    /// Flag followed by the value bound to an axis
    Axis {
        /// Command-line flag
        flag: String,
        /// Axis providing the value
        axis: String,
    },
    /// Flag followed by a value constant across the sweep
    Fixed {
        /// Command-line flag
        flag: String,
        /// Constant value
        value: String,
    },
    /// Flag without a value
    Switch {
        /// Command-line flag
        flag: String,
    },
}

impl ArgumentSpec {
    /// Flag taking its value from `axis`
    pub fn axis(flag: &str, axis: &str) -> Self {
        Self::Axis {
            flag: flag.to_string(),
            axis: axis.to_string(),
        }
    }

    /// Flag with a constant value
    pub fn fixed(flag: &str, value: &impl ToString) -> Self {
        Self::Fixed {
            flag: flag.to_string(),
            value: value.to_string(),
        }
    }

    /// Flag without a value
    pub fn switch(flag: &str) -> Self {
        Self::Switch {
            flag: flag.to_string(),
        }
    }
}

/// Program path plus the ordered argument layout shared by every run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandTemplate {
    program: PathBuf,
    arguments: Vec<ArgumentSpec>,
}

impl CommandTemplate {
    /// Create a template for `program`
    pub fn new(program: impl Into<PathBuf>, arguments: Vec<ArgumentSpec>) -> Self {
        Self {
            program: program.into(),
            arguments,
        }
    }

    /// Benchmark executable path
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argument layout in emission order
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Axes the template reads from each configuration
    pub fn referenced_axes(&self) -> impl Iterator<Item = &str> {
        self.arguments.iter().filter_map(|argument| match argument {
            ArgumentSpec::Axis { axis, .. } => Some(axis.as_str()),
            ArgumentSpec::Fixed { .. } | ArgumentSpec::Switch { .. } => None,
        })
    }

    /// Realize the argument list for one configuration
    ///
    /// Values are split on whitespace, so a device set `"0 1 2"` becomes three
    /// separate tokens after `--deviceIds`.
    ///
    /// # Errors
    ///
    /// Returns `MissingBinding` if the configuration does not bind an axis
    /// the template refers to
    pub fn build(&self, configuration: &Configuration) -> Result<Invocation> {
        let mut args = Vec::with_capacity(self.arguments.len() * 2);
        for argument in &self.arguments {
            match argument {
                ArgumentSpec::Axis { flag, axis } => {
                    let value =
                        configuration
                            .get(axis)
                            .ok_or_else(|| SweepError::MissingBinding {
                                axis: axis.clone(),
                            })?;
                    args.push(flag.clone());
                    args.extend(value.split_whitespace().map(ToString::to_string));
                }
                ArgumentSpec::Fixed { flag, value } => {
                    args.push(flag.clone());
                    args.extend(value.split_whitespace().map(ToString::to_string));
                }
                ArgumentSpec::Switch { flag } => args.push(flag.clone()),
            }
        }
        Ok(Invocation {
            program: self.program.clone(),
            args,
        })
    }
}

/// Concrete command for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to launch
    pub program: PathBuf,
    /// Argument tokens in order
    pub args: Vec<String>,
}

impl Invocation {
    /// Program and arguments joined by single spaces
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Process builder for this invocation, without stdio wiring
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// What was launched for one run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunRecord {
    /// Zero-based position in the sweep
    pub index: usize,
    /// Exact command line written to the log
    pub command_line: String,
}

/// Result of one run as seen by the driver
///
/// The exit status is kept for reporting only; it never changes the course
/// of the sweep.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    /// What was launched
    pub record: RunRecord,
    /// Exit code, `None` when the child was killed by a signal
    pub exit_code: Option<i32>,
    /// Whether the child reported success
    pub success: bool,
    /// Wall time from launch to exit
    pub elapsed: Duration,
}
