//! Command implementations

pub mod play;
pub mod score;

pub use play::{PlayConfig, generate_secret, run_play};
pub use score::{ScoreResult, score_pair};
