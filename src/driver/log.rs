//! Shared append-only run log

use crate::driver::invocation::Invocation;
use crate::io::configuration::{LOG_DELIMITER, LOG_SUFFIX};
use crate::io::error::{Result, SweepError};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;

/// Single log file receiving every command line and all benchmark output
///
/// Opened once per sweep in append mode. Headers are written unbuffered and
/// synced before each launch, so the child's output always lands after the
/// command line that produced it.
pub struct SweepLog {
    path: PathBuf,
    file: File,
}

impl SweepLog {
    /// Open (creating if needed) the log for appending
    ///
    /// # Errors
    ///
    /// Returns a `LogFile` error if the file cannot be opened
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| log_error(path, "open", source))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Log path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the delimiter, command line, delimiter block for one run
    ///
    /// # Errors
    ///
    /// Returns a `LogFile` error if writing or syncing fails
    pub fn write_header(&mut self, invocation: &Invocation) -> Result<()> {
        write!(
            self.file,
            "\n{LOG_DELIMITER}\n{}\n{LOG_DELIMITER}\n",
            invocation.command_line()
        )
        .map_err(|source| log_error(&self.path, "write", source))?;
        self.flush()
    }

    /// Stdout and stderr handles for a child, both pointing at the log
    ///
    /// # Errors
    ///
    /// Returns a `LogFile` error if the file handle cannot be duplicated
    pub fn child_stdio(&self) -> Result<(Stdio, Stdio)> {
        let stdout = self
            .file
            .try_clone()
            .map_err(|source| log_error(&self.path, "clone handle", source))?;
        let stderr = self
            .file
            .try_clone()
            .map_err(|source| log_error(&self.path, "clone handle", source))?;
        Ok((Stdio::from(stdout), Stdio::from(stderr)))
    }

    /// Push everything written so far to disk
    ///
    /// # Errors
    ///
    /// Returns a `LogFile` error if the sync fails
    pub fn flush(&mut self) -> Result<()> {
        self.file
            .flush()
            .and_then(|()| self.file.sync_data())
            .map_err(|source| log_error(&self.path, "flush", source))
    }
}

/// Default log path: the executable path with [`LOG_SUFFIX`] appended
pub fn default_log_path(program: &Path) -> PathBuf {
    let mut name = program.as_os_str().to_os_string();
    name.push(LOG_SUFFIX);
    PathBuf::from(name)
}

fn log_error(path: &Path, operation: &'static str, source: std::io::Error) -> SweepError {
    SweepError::LogFile {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
