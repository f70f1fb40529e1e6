//! Spinner feedback for the scaffolding steps.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Creates a spinner for a long-running step.
pub fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(spinner_style);
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Finishes a spinner with a green check mark.
pub fn succeed(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("{} {message}", style("✔").green()));
}

/// Finishes a spinner with a yellow warning mark.
pub fn warn(spinner: &ProgressBar, message: &str) {
    spinner.finish_with_message(format!("{} {message}", style("⚠").yellow()));
}
