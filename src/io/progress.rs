//! Column progress display while filling a grid

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} columns")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks resolved columns across reseeded attempts
///
/// Hidden progress managers keep the same bookkeeping without drawing,
/// which is what quiet runs and tests use.
pub struct ProgressManager {
    bar: ProgressBar,
    columns: usize,
    attempt: u32,
}

impl ProgressManager {
    /// Create a visible progress bar for a grid `columns` wide
    pub fn new(columns: usize) -> Self {
        let bar = ProgressBar::new(columns as u64);
        bar.set_style(PROGRESS_STYLE.clone());
        Self {
            bar,
            columns,
            attempt: 0,
        }
    }

    /// Create a progress manager that never draws
    pub fn hidden(columns: usize) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            columns,
            attempt: 0,
        }
    }

    /// Reset the bar for a new attempt with `seed`
    pub fn start_attempt(&mut self, attempt: u32, seed: u64) {
        self.attempt = attempt;
        self.bar.set_length(self.columns as u64);
        self.bar.set_position(0);
        self.bar.set_message(format!("attempt {attempt} (seed {seed})"));
    }

    /// Record that `column` has been fully resolved
    pub fn complete_column(&self, column: usize) {
        self.bar.set_position(column as u64 + 1);
    }

    /// Columns resolved in the current attempt
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Current attempt number, starting at 1 once an attempt begins
    pub const fn attempt(&self) -> u32 {
        self.attempt
    }

    /// Clear the bar after the run
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
