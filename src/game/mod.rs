//! Game state machine and the interactive loop that drives it

mod session;
mod state;

pub use session::{GameError, GameSummary, run};
pub use state::{Game, Turn};
