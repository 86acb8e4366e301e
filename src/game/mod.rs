//! Core Connect-Z logic: board with gravity, line scanning, and the move
//! simulator that classifies a game.

mod board;
mod dimensions;
mod outcome;
mod player;
mod simulator;
mod win;

pub use board::{Board, Cell, Placement};
pub use dimensions::Dimensions;
pub use outcome::Outcome;
pub use player::Player;
pub use simulator::{simulate, GameSimulator};
pub use win::{is_winning_placement, longest_run_through};
