//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting for archive downloads
//! - Interactive progress bars using indicatif
//! - Silent progress for tests and non-interactive use
//! - Verbose detail lines gated by `--verbose`
//!
//! All download progress goes through the ProgressReporter trait, so the
//! cache layer never talks to the terminal directly.

pub mod display;

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter trait for downloads
pub trait ProgressReporter {
    /// Start a download, with the total size when known
    fn start(&mut self, label: &str, total_bytes: Option<u64>);

    /// Record downloaded bytes
    fn advance(&mut self, bytes: u64);

    /// Download completed
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a byte progress bar
///
/// Falls back to a spinner when the server sends no content length.
#[derive(Default)]
pub struct InteractiveProgressReporter {
    pb: Option<ProgressBar>,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&mut self, label: &str, total_bytes: Option<u64>) {
        let pb = match total_bytes {
            Some(total) => {
                let pb = ProgressBar::new(total);
                if let Ok(style) = ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {bytes}/{total_bytes} {msg}")
                {
                    pb.set_style(style.progress_chars("#>-"));
                }
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                if let Ok(style) =
                    ProgressStyle::default_spinner().template("{spinner} {bytes} {msg}")
                {
                    pb.set_style(style);
                }
                pb
            }
        };
        pb.set_message(label.to_string());
        self.pb = Some(pb);
    }

    fn advance(&mut self, bytes: u64) {
        if let Some(ref pb) = self.pb {
            pb.inc(bytes);
        }
    }

    fn finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }

    fn abandon(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.abandon();
        }
    }
}

/// Silent progress reporter
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&mut self, _label: &str, _total_bytes: Option<u64>) {}

    fn advance(&mut self, _bytes: u64) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}

/// Output verbosity selected on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbosity {
    pub verbose: bool,
}

impl Verbosity {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Print a detail line on stderr when `--verbose` is set
    pub fn detail(&self, message: impl AsRef<str>) {
        if self.verbose {
            eprintln!("{}", Style::new().dim().apply_to(message.as_ref()));
        }
    }

    /// Print a warning on stderr regardless of verbosity
    pub fn warn(&self, message: impl AsRef<str>) {
        eprintln!(
            "{} {}",
            Style::new().yellow().bold().apply_to("warning:"),
            message.as_ref()
        );
    }
}

/// Pick the reporter for the current terminal
pub fn progress_reporter() -> Box<dyn ProgressReporter> {
    if console::Term::stderr().is_term() {
        Box::new(InteractiveProgressReporter::new())
    } else {
        Box::new(SilentProgressReporter)
    }
}
