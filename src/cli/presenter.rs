//! CLI presenter for output formatting
//!
//! Transition lines go to stdout with a timestamp; status and diagnostics
//! go to stderr.

use std::sync::Mutex;

use chrono::Local;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Presenter for CLI output formatting
pub struct Presenter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn timestamp() -> String {
        Local::now().format("%H:%M:%S").to_string()
    }

    /// Start a spinner with message
    pub fn start_spinner(&self, message: &str) {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        *self.spinner.lock().unwrap_or_else(|e| e.into_inner()) = Some(spinner);
    }

    /// Mark spinner as success and finish
    pub fn spinner_success(&self, message: &str) {
        if let Some(spinner) = self.spinner.lock().unwrap_or_else(|e| e.into_inner()).take() {
            spinner.finish_with_message(format!("{} {}", "✓".green(), message));
        }
    }

    /// Mark spinner as failed and finish
    pub fn spinner_fail(&self, message: &str) {
        if let Some(spinner) = self.spinner.lock().unwrap_or_else(|e| e.into_inner()).take() {
            spinner.finish_with_message(format!("{} {}", "✗".red(), message));
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a timestamped transition line to stdout
    pub fn transition(&self, message: &str) {
        println!("[{}] {}", Self::timestamp().cyan(), message);
    }

    /// Print a timestamped status line to stderr
    pub fn status(&self, message: &str) {
        eprintln!("[{}] {} {}", Self::timestamp(), "●".cyan(), message);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_has_clock_format() {
        let ts = Presenter::timestamp();
        assert_eq!(ts.len(), 8);
        assert_eq!(ts.chars().filter(|c| *c == ':').count(), 2);
    }

    #[test]
    fn presenter_starts_without_spinner() {
        let presenter = Presenter::new();
        assert!(presenter
            .spinner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_none());
    }
}
