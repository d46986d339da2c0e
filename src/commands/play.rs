//! Play command
//!
//! Prints the banner, draws a secret and hands over to the turn loop.

use crate::core::Number;
use crate::game::{self, Game, GameError, GameSummary};
use crate::output::print_banner;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Configuration for a game
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Seed for a reproducible secret; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl PlayConfig {
    #[must_use]
    pub const fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    /// Random source for this configuration
    #[must_use]
    pub fn rng(self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Generate a single secret
#[must_use]
pub fn generate_secret(config: PlayConfig) -> Number {
    Number::random(&mut config.rng())
}

/// Play one full game over the given input and output
///
/// # Errors
///
/// Returns an error if input ends before the secret is found or I/O fails.
pub fn run_play<R: BufRead, W: Write>(
    config: PlayConfig,
    input: &mut R,
    out: &mut W,
) -> Result<GameSummary, GameError> {
    print_banner(out)?;

    let game = Game::random(&mut config.rng());
    debug!(seeded = config.seed.is_some(), "game started");
    trace!(secret = %game.secret(), "secret generated");

    game::run(game, input, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Every valid number in ascending order, one per line
    fn all_numbers() -> String {
        (1000..10_000)
            .map(|n| n.to_string())
            .filter(|n| Number::parse(n).is_ok())
            .map(|n| n + "\n")
            .collect()
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = PlayConfig::new(Some(99));
        assert_eq!(generate_secret(config), generate_secret(config));
    }

    #[test]
    fn unseeded_secret_is_valid() {
        let secret = generate_secret(PlayConfig::default());
        assert!(Number::parse(secret.text()).is_ok());
    }

    #[test]
    fn play_prints_banner_and_finds_seeded_secret() {
        colored::control::set_override(false);
        let config = PlayConfig::new(Some(2024));
        let secret = generate_secret(config);

        let mut input = Cursor::new(all_numbers().into_bytes());
        let mut out = Vec::new();
        let summary = run_play(config, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary.secret, secret);
        assert!(text.starts_with("Hi there!\n"));
        assert!(text.contains("Let's play a bulls and cows game.\n"));

        // Exhaustive search in ascending order: attempts equal the secret's rank
        let rank = all_numbers()
            .lines()
            .position(|n| n == secret.text())
            .unwrap();
        assert_eq!(summary.attempts as usize, rank + 1);
    }

    #[test]
    fn play_fails_when_input_is_empty() {
        colored::control::set_override(false);
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let result = run_play(PlayConfig::new(Some(1)), &mut input, &mut out);
        assert!(matches!(
            result,
            Err(GameError::InputClosed { attempts: 0, .. })
        ));
    }
}
