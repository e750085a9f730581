mod engine;
mod rules;
mod types;

pub use engine::{Game, MoveError};
pub use rules::{WINNING_LINES, check_win, is_full};
pub use types::{Board, GameMode, GameState, GameStatus, Mark, Square};
