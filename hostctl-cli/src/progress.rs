//! Progress reporting for multi-step operations and task polling

use std::sync::Mutex;
use std::time::Duration;

use colored::*;
use hostctl_core::domain::notification::NotificationStatus;
use indicatif::{ProgressBar, ProgressStyle};

/// Receives step messages and polling updates; purely observational
pub trait ProgressReporter: Send + Sync {
    /// A new step of an operation is about to start
    fn step(&self, message: &str);

    /// Polling of a notification has begun
    fn waiting(&self, _handle: &str) {}

    /// Called after every poll with the time spent waiting so far
    fn poll(&self, _elapsed: Duration, _status: &NotificationStatus) {}

    /// Polling ended, successfully or not
    fn finish(&self, _success: bool) {}
}

/// Colored step lines on stdout plus a spinner while a task is polled
pub struct TerminalReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn with_spinner(&self, f: impl FnOnce(&mut Option<ProgressBar>)) {
        if let Ok(mut guard) = self.spinner.lock() {
            f(&mut guard);
        }
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for TerminalReporter {
    fn step(&self, message: &str) {
        println!("{} {}", "▸".cyan(), message);
    }

    fn waiting(&self, handle: &str) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"])
            .template("{spinner:.cyan} {prefix:.bold} {msg:.dim}")
        {
            pb.set_style(style);
        }
        pb.set_prefix("Waiting for task");
        pb.set_message(handle.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.with_spinner(|slot| *slot = Some(pb));
    }

    fn poll(&self, elapsed: Duration, status: &NotificationStatus) {
        self.with_spinner(|slot| {
            if let Some(pb) = slot {
                pb.set_message(format!("{} ({}s)", status, elapsed.as_secs()));
            }
        });
    }

    fn finish(&self, success: bool) {
        self.with_spinner(|slot| {
            if let Some(pb) = slot.take() {
                pb.finish_and_clear();
                if success {
                    println!("  {} {}", "✓".green(), "Task completed".dimmed());
                }
            }
        });
    }
}
