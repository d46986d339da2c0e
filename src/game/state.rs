//! Game state and turn evaluation

use crate::core::{InvalidNumber, Number, Score};
use rand::Rng;
use std::time::{Duration, Instant};

/// Outcome of submitting one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Input broke one or more format rules; the attempt counter is unchanged
    Rejected(InvalidNumber),
    /// Valid guess that did not find the secret
    Miss(Score),
    /// Valid guess equal to the secret
    Won,
}

/// State of a single game: the secret, valid attempts so far, and the start time
#[derive(Debug, Clone)]
pub struct Game {
    secret: Number,
    attempts: u32,
    started: Instant,
}

impl Game {
    /// Start a game against a known secret
    #[must_use]
    pub fn new(secret: Number) -> Self {
        Self {
            secret,
            attempts: 0,
            started: Instant::now(),
        }
    }

    /// Start a game against a freshly generated secret
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Number::random(rng))
    }

    /// Evaluate one line of player input
    ///
    /// Surrounding whitespace is ignored. Only valid guesses count as attempts.
    pub fn play(&mut self, input: &str) -> Turn {
        let guess = match Number::parse(input.trim()) {
            Ok(guess) => guess,
            Err(err) => return Turn::Rejected(err),
        };

        self.attempts += 1;
        let score = Score::calculate(&self.secret, &guess);

        if score.is_win() {
            Turn::Won
        } else {
            Turn::Miss(score)
        }
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Number {
        &self.secret
    }

    /// Number of valid guesses so far
    #[inline]
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Time since the game started
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
