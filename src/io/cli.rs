//! Command-line interface for running the LBM benchmark sweep

use crate::driver::log::default_log_path;
use crate::driver::runner::{RunDriver, SweepSummary};
use crate::io::configuration::DEFAULT_EXECUTABLE;
use crate::io::error::Result;
use crate::io::progress::{
    BarReporter, LogReporter, PlainReporter, ProgressReporter, SilentReporter,
};
use crate::io::settings::SweepSettings;
use crate::sweep::plan::SweepPlan;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// How sweep progress is displayed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ProgressMode {
    /// Live bar on stderr
    #[default]
    Bar,
    /// Carriage-return text bar on stderr, for terminals indicatif cannot drive
    Plain,
    /// Structured log events only
    Log,
    /// No progress output
    None,
}

#[derive(Parser)]
#[command(name = "lbmsweep")]
#[command(
    author,
    version,
    about = "Run the LBM benchmark over every valid parameter combination"
)]
/// Command-line arguments for the sweep driver
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Benchmark executable to invoke
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_EXECUTABLE)]
    pub executable: PathBuf,

    /// Run log (defaults to the executable path with `.log` appended)
    #[arg(short, long, value_name = "PATH")]
    pub log: Option<PathBuf>,

    /// JSON file overriding axis values, iteration counts, or exclusion rules
    #[arg(short, long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Iterations per run
    #[arg(long)]
    pub max_iter: Option<u64>,

    /// Warmup iterations per run
    #[arg(long)]
    pub warmup_iter: Option<u64>,

    /// Repetitions per run
    #[arg(long)]
    pub repetitions: Option<u64>,

    /// Print each command line instead of running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the number of valid configurations and exit
    #[arg(short, long)]
    pub count: bool,

    /// Progress display
    #[arg(short, long, value_enum, default_value_t = ProgressMode::Bar)]
    pub progress: ProgressMode,

    /// Suppress progress and informational output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log path, derived from the executable when not given
    pub fn log_path(&self) -> PathBuf {
        self.log
            .clone()
            .unwrap_or_else(|| default_log_path(&self.executable))
    }

    /// Progress display after applying `--quiet`
    pub const fn effective_progress(&self) -> ProgressMode {
        if self.quiet {
            ProgressMode::None
        } else {
            self.progress
        }
    }

    /// Default tracing filter directive for the chosen verbosity
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Settings file (or defaults) with command-line overrides applied
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be loaded
    pub fn settings(&self) -> Result<SweepSettings> {
        let mut settings = match &self.settings {
            Some(path) => SweepSettings::load(path)?,
            None => SweepSettings::default(),
        };
        if let Some(max_iter) = self.max_iter {
            settings.max_iter = max_iter;
        }
        if let Some(warmup_iter) = self.warmup_iter {
            settings.warmup_iter = warmup_iter;
        }
        if let Some(repetitions) = self.repetitions {
            settings.repetitions = repetitions;
        }
        Ok(settings)
    }
}

/// What a processed command line did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SweepReport {
    /// Only counted configurations
    Counted(usize),
    /// Listed command lines without running them
    Listed(usize),
    /// Ran the sweep
    Executed(SweepSummary),
}

/// Builds the sweep from the command line and runs, lists, or counts it
pub struct SweepProcessor {
    cli: Cli,
}

impl SweepProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the requested action
    ///
    /// # Errors
    ///
    /// Returns an error if the sweep declaration is invalid, the log cannot
    /// be opened or written, or the executable cannot be launched
    pub fn process(&self) -> Result<SweepReport> {
        let settings = self.cli.settings()?;
        let plan = SweepPlan::from_settings(&settings, self.cli.executable.clone())?;

        if self.cli.count {
            let total = plan.sweep.count();
            Self::emit(&total.to_string());
            return Ok(SweepReport::Counted(total));
        }

        if self.cli.dry_run {
            let mut listed = 0;
            for configuration in &plan.sweep {
                let invocation = plan.template.build(&configuration)?;
                Self::emit(&invocation.command_line());
                listed += 1;
            }
            return Ok(SweepReport::Listed(listed));
        }

        let log_path = self.cli.log_path();
        info!(
            executable = %self.cli.executable.display(),
            log = %log_path.display(),
            "starting sweep"
        );
        let mut driver = RunDriver::open(plan.template, &log_path, self.reporter())?;
        let summary = driver.run_sweep(&plan.sweep)?;
        Ok(SweepReport::Executed(summary))
    }

    fn reporter(&self) -> Box<dyn ProgressReporter> {
        match self.cli.effective_progress() {
            ProgressMode::Bar => Box::new(BarReporter::new()),
            ProgressMode::Plain => Box::new(PlainReporter::new(std::io::stderr())),
            ProgressMode::Log => Box::new(LogReporter),
            ProgressMode::None => Box::new(SilentReporter),
        }
    }

    // Count and dry-run output is the command's result, not a diagnostic
    #[allow(clippy::print_stdout)]
    fn emit(line: &str) {
        println!("{line}");
    }
}
