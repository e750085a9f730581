//! Game engine: move validation, turn management, and reset.

use super::rules;
use super::types::{GameMode, GameState, GameStatus};
use derive_more::{Display, Error};
use tracing::instrument;

/// Errors rejected by [`Game::make_move`].
///
/// The input boundary treats every variant as a silent no-op; see
/// [`crate::GameController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Game already ended in a win or draw.
    #[display("game is already over")]
    GameOver,
    /// Index outside 0-8.
    #[display("position out of bounds (must be 0-8)")]
    OutOfBounds,
    /// Square already occupied.
    #[display("square is already occupied")]
    SquareOccupied,
}

/// Tic-tac-toe game engine.
///
/// Owns the [`GameState`] and is its only mutator: moves go through
/// [`Game::make_move`], everything else through [`Game::reset`].
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game in the given mode.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: GameState::new(mode),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move at the given index (0-8) for the current player.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        if self.state.status() != &GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }
        if index >= 9 {
            return Err(MoveError::OutOfBounds);
        }
        if !self.state.board().is_empty(index) {
            return Err(MoveError::SquareOccupied);
        }

        let mover = self.state.current_player();
        self.state.apply_move(index, mover);

        // Win is evaluated before draw: a full board holding a winning
        // line is a win.
        if rules::check_win(self.state.board(), mover) {
            self.state.set_status(GameStatus::Won(mover));
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
        }

        Ok(())
    }

    /// Resets to a fresh board in the given mode, unconditionally
    /// discarding any game in progress.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) {
        self.state = GameState::new(mode);
    }

    /// Status line for the renderer.
    ///
    /// One of `"Current Turn: X"`, `"Current Turn: O"`, `"X Wins!"`,
    /// `"O Wins!"`, `"It's a Draw!"`.
    pub fn status_message(&self) -> String {
        match self.state.status() {
            GameStatus::InProgress => {
                format!("Current Turn: {}", self.state.current_player())
            }
            GameStatus::Won(mark) => format!("{mark} Wins!"),
            GameStatus::Draw => "It's a Draw!".to_string(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
