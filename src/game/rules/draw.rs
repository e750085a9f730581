//! Draw detection logic for tic-tac-toe.

use super::super::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// The engine evaluates this only after win detection: a full board
/// holding a winning line is a win, not a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
