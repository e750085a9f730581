//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Mark, Square};
use tracing::instrument;

/// The 8 winning index triples, constant for the process lifetime.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Checks whether `mark` holds a complete winning line.
#[instrument]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == Some(Square::Occupied(mark))))
}
