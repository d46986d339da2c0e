//! Formatting utilities for terminal output

use crate::core::Score;
use std::time::Duration;

/// Separator line printed between sections (62 dashes)
pub const SEPARATOR: &str = "--------------------------------------------------------------";

/// Prefix `word` with `count`, adding an "s" unless the count is exactly one
///
/// # Examples
/// ```
/// use bulls_and_cows::output::formatters::pluralize;
///
/// assert_eq!(pluralize(1, "bull"), "1 bull");
/// assert_eq!(pluralize(0, "cow"), "0 cows");
/// ```
#[must_use]
pub fn pluralize(count: u64, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Format whole seconds as "X minutes, Y seconds", or just "Y seconds" under a minute
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let secs = seconds % 60;

    if minutes > 0 {
        format!(
            "{}, {}",
            pluralize(minutes, "minute"),
            pluralize(secs, "second")
        )
    } else {
        pluralize(secs, "second")
    }
}

/// Round a duration to the nearest whole second, ties to even
#[must_use]
pub fn rounded_seconds(elapsed: Duration) -> u64 {
    elapsed.as_secs_f64().round_ties_even() as u64
}

/// Format a score as "N bulls, M cows"
#[must_use]
pub fn format_score(score: Score) -> String {
    format!(
        "{}, {}",
        pluralize(u64::from(score.bulls()), "bull"),
        pluralize(u64::from(score.cows()), "cow")
    )
}
