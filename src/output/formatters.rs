//! Formatting utilities for terminal output

use crate::core::{PLACEHOLDER, Pattern};
use colored::{ColoredString, Colorize};

/// Pattern cells separated by spaces, e.g. `C * S Ă`
#[must_use]
pub fn spaced_pattern(pattern: &Pattern) -> String {
    (0..pattern.len())
        .map(|i| pattern.get(i).unwrap_or(PLACEHOLDER).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pattern with revealed letters highlighted and placeholders dimmed
#[must_use]
pub fn colored_pattern(pattern: &Pattern) -> String {
    (0..pattern.len())
        .map(|i| match pattern.get(i) {
            Some(letter) => letter.to_string().bright_green().bold().to_string(),
            None => PLACEHOLDER.to_string().bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// `OK`/`FAIL` label colored by outcome
#[must_use]
pub fn status_label(found: bool) -> ColoredString {
    if found {
        "OK".green().bold()
    } else {
        "FAIL".red().bold()
    }
}
