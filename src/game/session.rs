//! Interactive turn loop
//!
//! Reads one guess per line until the secret is found, printing feedback after each.

use super::{Game, Turn};
use crate::core::Number;
use crate::output::formatters::rounded_seconds;
use crate::output::{print_invalid_guess, print_miss, print_prompt, print_win};
use std::fmt;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub secret: Number,
    pub attempts: u32,
    pub elapsed_secs: u64,
}

/// Error that ends a game before the secret is found
#[derive(Debug)]
pub enum GameError {
    Io(io::Error),
    InputClosed { secret: Number, attempts: u32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::InputClosed { secret, attempts } => write!(
                f,
                "input closed after {attempts} valid guess(es); the number was {secret}"
            ),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InputClosed { .. } => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Run the turn loop until the player finds the secret
///
/// # Errors
///
/// Returns `GameError::InputClosed` if input ends before a winning guess, and
/// `GameError::Io` if reading or writing fails.
pub fn run<R: BufRead, W: Write>(
    mut game: Game,
    input: &mut R,
    out: &mut W,
) -> Result<GameSummary, GameError> {
    let mut buf = Vec::new();

    loop {
        print_prompt(out)?;

        // Raw bytes so a non-UTF-8 line becomes a rejected guess, not an I/O error
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            warn!(attempts = game.attempts(), "input closed before the secret was found");
            return Err(GameError::InputClosed {
                secret: game.secret().clone(),
                attempts: game.attempts(),
            });
        }

        let line = String::from_utf8_lossy(&buf);
        match game.play(&line) {
            Turn::Rejected(err) => {
                debug!(
                    input = err.input(),
                    violations = ?err.violations(),
                    "guess rejected"
                );
                print_invalid_guess(out, &err)?;
            }
            Turn::Miss(score) => {
                let elapsed_secs = rounded_seconds(game.elapsed());
                debug!(
                    attempt = game.attempts(),
                    bulls = score.bulls(),
                    cows = score.cows(),
                    "guess scored"
                );
                print_miss(out, score, elapsed_secs)?;
            }
            Turn::Won => {
                let elapsed_secs = rounded_seconds(game.elapsed());
                info!(attempts = game.attempts(), elapsed_secs, "secret found");
                print_win(out, game.attempts(), elapsed_secs)?;
                out.flush()?;

                return Ok(GameSummary {
                    secret: game.secret().clone(),
                    attempts: game.attempts(),
                    elapsed_secs,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::formatters::SEPARATOR;
    use std::io::Cursor;

    fn play(secret: &str, lines: &str) -> (Result<GameSummary, GameError>, String) {
        colored::control::set_override(false);
        let game = Game::new(Number::parse(secret).unwrap());
        let mut input = Cursor::new(lines.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run(game, &mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_cows_then_wins_on_second_guess() {
        let (result, text) = play("1945", "5491\n1945\n");
        let summary = result.unwrap();

        assert_eq!(summary.attempts, 2);
        assert_eq!(summary.secret.text(), "1945");
        assert!(text.contains("0 bulls, 4 cows\nTime elapsed: 0 seconds\n"));
        assert!(text.contains("in 2 guesses!\n"));
        assert!(text.ends_with("Time taken: 0 seconds\n"));
        assert_eq!(text.matches(">>> ").count(), 2);
    }

    #[test]
    fn invalid_guesses_do_not_count_as_attempts() {
        let (result, text) = play("1945", "12a3\n0123\n  1945  \n");
        let summary = result.unwrap();

        assert_eq!(summary.attempts, 1);
        assert!(text.contains("- Your guess must contain digits only.\n"));
        assert!(text.contains("- Your guess must not start with 0.\n"));
        assert_eq!(text.matches("Invalid input!").count(), 2);
        assert!(text.contains("in 1 guess!\n"));
    }

    #[test]
    fn empty_line_is_rejected_with_all_rules() {
        let (result, text) = play("1945", "\n1945\n");
        assert_eq!(result.unwrap().attempts, 1);
        assert!(text.contains(&format!(
            "- Your guess must contain digits only.\n\
             - Your guess must have 4 digits.\n\
             {SEPARATOR}\n"
        )));
    }

    #[test]
    fn non_utf8_line_is_rejected_not_fatal() {
        colored::control::set_override(false);
        let game = Game::new(Number::parse("1945").unwrap());
        let mut input = Cursor::new(b"\xff\xfe12\n1945\n".to_vec());
        let mut out = Vec::new();
        let summary = run(game, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(summary.attempts, 1);
        assert!(text.contains("- Your guess must contain digits only.\n"));
        assert_eq!(text.matches("Invalid input!").count(), 1);
    }

    #[test]
    fn first_guess_win() {
        let (result, text) = play("1234", "1234\n");
        assert_eq!(result.unwrap().attempts, 1);
        assert!(!text.contains("Time elapsed"));
    }

    #[test]
    fn eof_before_win_is_an_error() {
        let (result, text) = play("1945", "1234\n");
        match result {
            Err(GameError::InputClosed { secret, attempts }) => {
                assert_eq!(secret.text(), "1945");
                assert_eq!(attempts, 1);
            }
            other => panic!("expected InputClosed, got {other:?}"),
        }
        assert!(text.contains("1 bull, 1 cow\n"));
    }

    #[test]
    fn stops_reading_after_win() {
        let (result, text) = play("1945", "1945\n5491\n");
        assert_eq!(result.unwrap().attempts, 1);
        assert!(!text.contains("cows"));
    }

    #[test]
    fn game_error_display() {
        let err = GameError::InputClosed {
            secret: Number::parse("1945").unwrap(),
            attempts: 3,
        };
        assert_eq!(
            err.to_string(),
            "input closed after 3 valid guess(es); the number was 1945"
        );
    }
}
