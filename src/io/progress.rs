//! Sweep progress counter and interchangeable progress displays

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_LABEL, PROGRESS_LABEL_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::Write;
use std::sync::LazyLock;
use tracing::info;

/// Runs completed so far against the precomputed sweep total
///
/// Starts at zero and only ever moves forward within a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepProgress {
    completed: usize,
    total: usize,
}

impl SweepProgress {
    /// Fresh counter for a sweep of `total` runs
    pub const fn new(total: usize) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    /// Record one finished run, whatever its outcome
    pub const fn advance(&mut self) {
        self.completed += 1;
    }

    /// Runs finished so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Precomputed number of runs
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Completed share in `[0, 1]`; an empty sweep counts as complete
    pub fn fraction(&self) -> f64 {
        fraction(self.completed, self.total)
    }

    /// Completed share as a whole percentage, rounded down
    pub fn percent(&self) -> usize {
        percent(self.completed, self.total)
    }
}

fn fraction(current: usize, total: usize) -> f64 {
    if total == 0 {
        1.0
    } else {
        (current as f64 / total as f64).clamp(0.0, 1.0)
    }
}

fn percent(current: usize, total: usize) -> usize {
    (fraction(current, total) * 100.0).floor() as usize
}

/// Narrow display seam for sweep progress
pub trait ProgressReporter {
    /// Called once before the first run
    fn start(&mut self, total: usize) {
        let _ = total;
    }

    /// Called after every run with the updated counter
    fn report(&mut self, current: usize, total: usize);

    /// Called once after the last run
    fn finish(&mut self) {}
}

/// Render `Progress   | [████----] 50% ` for `width` bar cells
pub fn render_bar(current: usize, total: usize, width: usize) -> String {
    let share = fraction(current, total);
    let filled = ((width as f64 * share).floor() as usize).min(width);
    let shown = percent(current, total);
    format!(
        "{PROGRESS_LABEL:<PROGRESS_LABEL_WIDTH$} | [{}{}] {shown}% ",
        "█".repeat(filled),
        "-".repeat(width - filled),
    )
}

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:10} | [{bar:40}] {percent}% {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█-")
});

/// Live terminal bar drawn with indicatif
pub struct BarReporter {
    bar: ProgressBar,
}

impl Default for BarReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl BarReporter {
    /// Bar drawn on stderr
    pub fn new() -> Self {
        Self::with_draw_target(ProgressDrawTarget::stderr())
    }

    /// Bar drawn on a custom target (hidden targets keep tests quiet)
    pub fn with_draw_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.set_style(BAR_STYLE.clone());
        bar.set_prefix(PROGRESS_LABEL);
        Self { bar }
    }

    /// Position currently shown
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressReporter for BarReporter {
    fn start(&mut self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    fn report(&mut self, current: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
    }

    fn finish(&mut self) {
        self.bar.finish();
    }
}

/// Carriage-return redraw of [`render_bar`] onto any writer
pub struct PlainReporter<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> PlainReporter<W> {
    /// Reporter writing bars of the standard width to `out`
    pub const fn new(out: W) -> Self {
        Self {
            out,
            width: PROGRESS_BAR_WIDTH,
        }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressReporter for PlainReporter<W> {
    fn start(&mut self, total: usize) {
        self.report(0, total);
    }

    fn report(&mut self, current: usize, total: usize) {
        // Best effort; progress is not part of the sweep record
        let _ = write!(self.out, "\r{}", render_bar(current, total, self.width));
        let _ = self.out.flush();
    }

    fn finish(&mut self) {
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}

/// Progress as structured tracing events
#[derive(Default)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn start(&mut self, total: usize) {
        info!(total, "sweep started");
    }

    fn report(&mut self, current: usize, total: usize) {
        info!(current, total, percent = percent(current, total), "sweep progress");
    }

    fn finish(&mut self) {
        info!("sweep finished");
    }
}

/// Discards all progress
#[derive(Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn report(&mut self, _current: usize, _total: usize) {}
}
