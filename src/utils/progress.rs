//! Spinners for long-running operations
//!
//! depmatrix only ever waits on one thing at a time (fetching a remote
//! catalog), so this wraps `indicatif` with a single spinner type. The spinner
//! is hidden when the `DEPMATRIX_NO_PROGRESS` environment variable is set,
//! which keeps output clean in CI and scripted use.
//!
//! # Examples
//!
//! ```rust
//! use depmatrix_cli::utils::progress::ProgressBar;
//!
//! let spinner = ProgressBar::new_spinner();
//! spinner.set_message("Fetching catalog...");
//!
//! // Long running operation
//! // fetch_catalog().await?;
//!
//! spinner.finish_and_clear();
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

use crate::constants::ENV_NO_PROGRESS;

/// Checks if progress indicators should be disabled.
///
/// Spinners are disabled when the `DEPMATRIX_NO_PROGRESS` environment
/// variable is set to any value, or when the `--no-progress` flag was passed
/// (the CLI sets the variable before commands run).
fn is_progress_disabled() -> bool {
    std::env::var(ENV_NO_PROGRESS).is_ok()
}

/// A spinner with consistent styling across depmatrix operations.
///
/// Wraps the `indicatif` progress bar and automatically becomes a hidden
/// no-op when progress output is disabled, so call sites never need to
/// branch on it.
#[derive(Clone)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Creates a spinner for indeterminate work.
    ///
    /// The spinner animates with Unicode Braille patterns
    /// (`⠋ ⠙ ⠹ ⠸ ⠼ ⠴ ⠦ ⠧ ⠇ ⠏`), ticking every 100ms.
    #[must_use]
    pub fn new_spinner() -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self { inner: bar }
    }

    /// Sets the message displayed next to the spinner.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Sets the prefix displayed before the spinner.
    pub fn set_prefix(&self, prefix: impl Into<String>) {
        self.inner.set_prefix(prefix.into());
    }

    /// Finishes the spinner and replaces it with a completion message.
    pub fn finish_with_message(&self, msg: impl Into<String>) {
        self.inner.finish_with_message(msg.into());
    }

    /// Finishes the spinner and removes it from the terminal entirely.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{prefix:.bold} {spinner:.cyan} {msg}")
        .unwrap()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}

/// Creates a spinner with an initial message for quick use.
///
/// # Examples
///
/// ```rust
/// use depmatrix_cli::utils::progress::spinner_with_message;
///
/// let spinner = spinner_with_message("Fetching catalog...");
/// // fetch().await?;
/// spinner.finish_and_clear();
/// ```
pub fn spinner_with_message(msg: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(msg);
    spinner
}
