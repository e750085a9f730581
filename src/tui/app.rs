//! Application state between the terminal events and the controller.

use crossterm::event::KeyCode;
use simply_tictactoe::{Effect, GameController, GameMode};
use tracing::debug;

/// TUI application state.
pub struct App {
    controller: GameController,
    cursor: usize,
    should_quit: bool,
}

impl App {
    /// Creates the application around a controller.
    pub fn new(controller: GameController) -> Self {
        Self {
            controller,
            cursor: 4,
            should_quit: false,
        }
    }

    /// Returns the controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Returns the controller mutably.
    pub fn controller_mut(&mut self) -> &mut GameController {
        &mut self.controller
    }

    /// Returns the cursor index (0-8).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press, returning any effect to run.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Effect> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('r') => self.controller.restart(),
            KeyCode::Char('m') => {
                let next = match self.controller.game().state().mode() {
                    GameMode::HumanVsHuman => GameMode::HumanVsComputer,
                    GameMode::HumanVsComputer => GameMode::HumanVsHuman,
                };
                self.controller.set_mode(next)
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Keys 1-9 map to squares left to right, top to bottom.
                let digit = c.to_digit(10)? as usize;
                if (1..=9).contains(&digit) {
                    self.controller.submit_move(digit - 1)
                } else {
                    None
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.controller.submit_move(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
                debug!(cursor = self.cursor, "cursor moved");
                None
            }
            _ => None,
        }
    }
}

/// Moves the board cursor with arrow keys, staying on the grid.
fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / 3, cursor % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    row * 3 + col
}
