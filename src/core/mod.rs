//! Core domain types for Bulls and Cows
//!
//! Pure, I/O-free types: the validated four-digit number and the score of a guess.

mod number;
mod score;

pub use number::{DIGITS, InvalidNumber, Number, Violation};
pub use score::Score;
