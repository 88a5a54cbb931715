//! Core Connect Four game logic: board representation, player types, and the
//! game state with drop, win, and tie resolution.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Run, CONNECT, DEFAULT_COLS, DEFAULT_ROWS, DIRECTIONS};
pub use player::Player;
pub use state::{GameState, MoveResult};
