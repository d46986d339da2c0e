//! Terminal output formatting
//!
//! Screen text and pretty-printing for the game.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_invalid_guess, print_miss, print_prompt, print_win};
