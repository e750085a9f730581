//! Terminal tic-tac-toe with a random computer opponent.
//!
//! The crate is split along the game's input/output boundaries:
//!
//! - `game` - board, rules, and the validated move dispatcher
//! - `players` - move selection for the computer opponent
//! - `controller` - input gating, mode/restart handling, and the
//!   deferred computer move
//!
//! The bundled binary renders the game with ratatui; the library carries
//! no terminal code, so embedders can drive [`GameController`] from any
//! front end and render from [`BoardView`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod game;
mod players;

// Crate-level exports - controller and scheduling
pub use controller::{
    BoardView, CellView, COMPUTER_MARK, DeferredMove, Effect, GameController, THINKING_DELAY,
    spawn_deferred_move,
};

// Crate-level exports - game types
pub use game::{
    Board, Game, GameMode, GameState, GameStatus, Mark, MoveError, Square, WINNING_LINES,
    check_win, is_full,
};

// Crate-level exports - computer opponents
pub use players::{MoveSelector, RandomSelector};
