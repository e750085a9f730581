//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// X (goes first).
    X,
    /// O (goes second; the computer's mark in human-vs-computer mode).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index. Occupied squares never revert
    /// to empty; mutation goes through the move dispatcher only.
    pub(crate) fn set(&mut self, index: usize, square: Square) {
        self.squares[index] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Indices of all empty squares, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Game mode - who plays O?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans alternating at one keyboard.
    #[default]
    HumanVsHuman,
    /// A human as X against the computer opponent as O.
    HumanVsComputer,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsComputer => "Human vs Computer",
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Mark,
    /// Game status.
    status: GameStatus,
    /// Active mode.
    mode: GameMode,
    /// Move history (indices played).
    history: Vec<usize>,
}

impl GameState {
    /// Creates a fresh state in the given mode. X always moves first.
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the move history.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Applies a move (unchecked - use [`super::Game::make_move`] for validation).
    pub(super) fn apply_move(&mut self, index: usize, mark: Mark) {
        self.board.set(index, Square::Occupied(mark));
        self.history.push(index);
        self.current_player = mark.opponent();
    }

    /// Sets the game status.
    pub(super) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
