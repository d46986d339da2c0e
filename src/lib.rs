//! Bulls and Cows
//!
//! The classic number-guessing game: find a secret four-digit number with unique
//! digits, guided by bulls (right digit, right place) and cows (right digit, wrong place).
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::{Number, Score};
//!
//! let secret = Number::parse("1945").unwrap();
//! let guess = Number::parse("5491").unwrap();
//!
//! let score = Score::calculate(&secret, &guess);
//! assert_eq!((score.bulls(), score.cows()), (0, 4));
//! ```

// Core domain types
pub mod core;

// Game state and turn loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;
