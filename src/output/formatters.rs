//! Formatting utilities for terminal output

use crate::core::Score;

/// Format the outcome of a round the way the legacy tool printed it
///
/// `Result: (2, 1).` on success, `Result: None.` when no score was produced.
#[must_use]
pub fn format_result(score: Option<Score>) -> String {
    match score {
        Some(score) => format!("Result: {score}."),
        None => "Result: None.".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
