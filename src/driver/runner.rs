//! Sequential execution of a sweep against the benchmark executable

use crate::driver::invocation::{CommandTemplate, RunOutcome, RunRecord};
use crate::driver::log::SweepLog;
use crate::io::error::{Result, SweepError};
use crate::io::progress::{ProgressReporter, SweepProgress};
use crate::sweep::configuration::Configuration;
use crate::sweep::enumerator::Sweep;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Totals reported once a sweep has run to completion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Precomputed number of configurations
    pub total: usize,
    /// Runs launched
    pub executed: usize,
    /// Runs whose child did not exit successfully
    pub failed: usize,
}

/// Launches one child process per configuration, one at a time
///
/// Children inherit the log as stdout and stderr. The driver waits for each
/// child before starting the next and never enforces a timeout, so a hung
/// benchmark stalls the sweep until it is killed externally.
pub struct RunDriver {
    template: CommandTemplate,
    log: SweepLog,
    reporter: Box<dyn ProgressReporter>,
    next_index: usize,
}

impl RunDriver {
    /// Open the shared log and prepare to run `template`
    ///
    /// # Errors
    ///
    /// Returns a `LogFile` error if the log cannot be opened
    pub fn open(
        template: CommandTemplate,
        log_path: &Path,
        reporter: Box<dyn ProgressReporter>,
    ) -> Result<Self> {
        let log = SweepLog::open(log_path)?;
        debug!(log = %log.path().display(), "opened run log");
        Ok(Self {
            template,
            log,
            reporter,
            next_index: 0,
        })
    }

    /// Path of the shared log
    pub fn log_path(&self) -> &Path {
        self.log.path()
    }

    /// Run the benchmark once for `configuration`
    ///
    /// The exit status is recorded but never treated as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration lacks an axis the command layout needs
    /// - The log cannot be written or synced
    /// - The executable cannot be launched at all
    pub fn run(&mut self, configuration: &Configuration) -> Result<RunOutcome> {
        let invocation = self.template.build(configuration)?;
        let record = RunRecord {
            index: self.next_index,
            command_line: invocation.command_line(),
        };
        self.next_index += 1;

        self.log.write_header(&invocation)?;
        info!(index = record.index, command = %record.command_line, "launching run");

        let (stdout, stderr) = self.log.child_stdio()?;
        let started = Instant::now();
        let status = invocation
            .command()
            .stdout(stdout)
            .stderr(stderr)
            .status()
            .map_err(|source| SweepError::Launch {
                program: invocation.program.clone(),
                source,
            })?;
        let elapsed = started.elapsed();
        self.log.flush()?;

        if !status.success() {
            warn!(index = record.index, %status, "run exited unsuccessfully");
        }

        Ok(RunOutcome {
            record,
            exit_code: status.code(),
            success: status.success(),
            elapsed,
        })
    }

    /// Run every configuration in order against a precomputed total
    ///
    /// # Errors
    ///
    /// Stops at the first fatal error (log I/O or launch failure); runs that
    /// merely fail are counted and the sweep moves on
    pub fn run_configurations<I>(&mut self, configurations: I, total: usize) -> Result<SweepSummary>
    where
        I: IntoIterator<Item = Configuration>,
    {
        let mut progress = SweepProgress::new(total);
        let mut summary = SweepSummary {
            total,
            ..SweepSummary::default()
        };

        self.reporter.start(total);
        for configuration in configurations {
            let outcome = self.run(&configuration)?;
            summary.executed += 1;
            if !outcome.success {
                summary.failed += 1;
            }
            progress.advance();
            self.reporter.report(progress.completed(), progress.total());
        }
        self.reporter.finish();

        info!(
            total = summary.total,
            executed = summary.executed,
            failed = summary.failed,
            log = %self.log.path().display(),
            "sweep complete"
        );
        Ok(summary)
    }

    /// Count the sweep, then run it
    ///
    /// # Errors
    ///
    /// See [`RunDriver::run_configurations`]
    pub fn run_sweep(&mut self, sweep: &Sweep) -> Result<SweepSummary> {
        let total = sweep.count();
        info!(total, "counted sweep configurations");
        self.run_configurations(sweep.iter(), total)
    }
}
