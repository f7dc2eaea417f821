//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Score};

/// Format a score the way the terminal game reports it
#[must_use]
pub fn format_score(score: Score) -> String {
    format!("Result: {score}")
}

/// Format a score as emoji squares
///
/// Green for each A, yellow for each B, white for the remaining digits.
#[must_use]
pub fn score_to_emoji(score: Score) -> String {
    let a = usize::from(score.a);
    let b = usize::from(score.b);
    let misses = CODE_LENGTH.saturating_sub(a + b);

    let mut result = String::with_capacity(CODE_LENGTH * 4);
    result.push_str(&"🟩".repeat(a));
    result.push_str(&"🟨".repeat(b));
    result.push_str(&"⬜".repeat(misses));
    result
}
