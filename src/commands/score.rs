//! Score command
//!
//! Scores a single guess against a given secret without playing a game.

use crate::core::{InvalidNumber, Number, Score};

/// Result of scoring a pair of numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreResult {
    pub secret: Number,
    pub guess: Number,
    pub score: Score,
}

/// Validate both numbers and score the guess
///
/// # Errors
///
/// Returns the first input's `InvalidNumber` (with every violated rule) if either
/// number is invalid; the secret is checked first.
pub fn score_pair(secret: &str, guess: &str) -> Result<ScoreResult, InvalidNumber> {
    let secret = Number::parse(secret.trim())?;
    let guess = Number::parse(guess.trim())?;
    let score = Score::calculate(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        score,
    })
}
