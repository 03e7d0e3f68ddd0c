//! Core drop-piece game logic: board representation, player colors, win
//! evaluation, and the move-sequence driver.

mod board;
mod driver;
mod player;
mod win;

pub use board::{Board, Cell, PlacementOutcome};
pub use driver::{Game, GameOutcome};
pub use player::Player;
