//! Core Connect Four game logic: board representation, player types, and the
//! board environment the search forks and mutates.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, MoveError, COLS, ROWS};
pub use player::Player;
pub use state::{GameState, Outcome};

#[cfg(test)]
pub(crate) use state::full_drawn_board;
