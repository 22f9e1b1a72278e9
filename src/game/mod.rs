//! Game state machine, statistics and the input dispatcher

mod controller;
mod input;
mod session;
mod stats;

pub use controller::Controller;
pub use input::Key;
pub use session::{GameSession, GameState, GuessError, GuessOutcome, Tile};
pub use stats::{Outcome, Statistics};
