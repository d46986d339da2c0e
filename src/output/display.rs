//! Screen text for the game
//!
//! Every function writes to a caller-supplied writer so the game loop can run
//! against stdout or an in-memory buffer.

use super::formatters::{SEPARATOR, format_duration, format_score, pluralize};
use crate::core::{InvalidNumber, Score};
use colored::Colorize;
use std::io::{self, Write};

/// Reminder shown after the list of violated rules
pub const INVALID_INPUT_REMINDER: &str =
    "Invalid input! Please enter a 4-digit number with unique digits and not starting with 0.";

/// Print the welcome banner
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Hi there!")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "I've generated a random 4 digit number for you.")?;
    writeln!(out, "Let's play a bulls and cows game.")?;
    writeln!(out, "{SEPARATOR}")
}

/// Print the guess prompt and flush, leaving the cursor after `>>> `
///
/// # Errors
/// Returns an error if writing or flushing fails.
pub fn print_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Enter a number:\n{SEPARATOR}\n>>> ")?;
    out.flush()
}

/// Print one bullet per violated rule, the separator, then the reminder
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_invalid_guess<W: Write>(out: &mut W, err: &InvalidNumber) -> io::Result<()> {
    for violation in err.violations() {
        writeln!(out, "{}", format!("- {violation}").red())?;
    }
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{}", INVALID_INPUT_REMINDER.yellow())
}

/// Print feedback for a guess that missed
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_miss<W: Write>(out: &mut W, score: Score, elapsed_secs: u64) -> io::Result<()> {
    writeln!(out, "{}", format_score(score))?;
    writeln!(out, "Time elapsed: {}", format_duration(elapsed_secs))?;
    writeln!(out, "{SEPARATOR}")
}

/// Print the closing lines after the secret is found
///
/// # Errors
/// Returns an error if writing fails.
pub fn print_win<W: Write>(out: &mut W, attempts: u32, elapsed_secs: u64) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "Correct, you've guessed the right number".green().bold()
    )?;
    writeln!(out, "in {}!", pluralize(u64::from(attempts), "guess"))?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{}", "That's amazing!".bright_green())?;
    writeln!(out, "Time taken: {}", format_duration(elapsed_secs))
}
