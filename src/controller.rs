//! Input boundary and deferred computer-move scheduling.
//!
//! [`GameController`] owns the [`Game`] and exposes the three operations a
//! renderer may invoke: [`GameController::submit_move`],
//! [`GameController::set_mode`], and [`GameController::restart`]. Invalid
//! requests are ignored rather than surfaced.
//!
//! The computer's reply is never applied synchronously. The controller
//! hands back an [`Effect`] carrying a [`DeferredMove`]; the shell runs
//! the deferral (see [`spawn_deferred_move`]) and feeds the move back
//! through [`GameController::apply_deferred`]. While the deferral is
//! pending the board is locked against human input.

use crate::game::{Game, GameMode, GameStatus, Mark, Square};
use crate::players::MoveSelector;
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Fixed deferral before a scheduled computer move lands, simulating
/// deliberation.
pub const THINKING_DELAY: Duration = Duration::from_millis(500);

/// The computer always plays O; X is human and always opens.
pub const COMPUTER_MARK: Mark = Mark::O;

/// A computer move captured at dispatch time.
///
/// `epoch` records the reset generation the move was scheduled under.
/// [`GameController::apply_deferred`] discards the move if a reset
/// happened in the interim, so a stale move never lands on a fresh board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredMove {
    /// Board index chosen by the selector.
    pub index: usize,
    /// Reset generation at schedule time.
    pub epoch: u64,
}

/// Side effect requested by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Apply the contained move after [`THINKING_DELAY`] (or the shell's
    /// configured delay).
    ScheduleComputerMove(DeferredMove),
}

/// Spawns the deferral timer for a scheduled computer move.
///
/// Sleeps for `delay`, then feeds the move back through `tx`. The
/// receiving loop is expected to call [`GameController::apply_deferred`].
/// The timer is not cancelled on reset; the epoch check in
/// `apply_deferred` makes its payload harmless instead.
pub fn spawn_deferred_move(
    mv: DeferredMove,
    delay: Duration,
    tx: mpsc::UnboundedSender<DeferredMove>,
) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // Receiver may be gone on shutdown.
        let _ = tx.send(mv);
    });
}

/// Renderer-facing cell: its mark and whether input is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Occupying mark, if any.
    pub mark: Option<Mark>,
    /// Whether a move on this cell would currently be accepted.
    pub enabled: bool,
}

/// Snapshot of everything the renderer needs.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    /// The 9 cells in row-major order.
    pub cells: [CellView; 9],
    /// Status line, e.g. `"Current Turn: X"` or `"It's a Draw!"`.
    pub status: String,
    /// Active mode.
    pub mode: GameMode,
    /// True while the computer's deferred move is pending.
    pub thinking: bool,
}

/// Owns the game and enforces the input-acceptance gates.
pub struct GameController {
    game: Game,
    selector: Box<dyn MoveSelector>,
    epoch: u64,
    awaiting_computer: bool,
}

impl GameController {
    /// Creates a controller in the given mode.
    pub fn new(mode: GameMode, selector: Box<dyn MoveSelector>) -> Self {
        info!(mode = mode.name(), opponent = selector.name(), "new game");
        Self {
            game: Game::new(mode),
            selector,
            epoch: 0,
            awaiting_computer: false,
        }
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// True while a scheduled computer move has not yet landed.
    pub fn awaiting_computer(&self) -> bool {
        self.awaiting_computer
    }

    /// Submits a human move at `index`.
    ///
    /// The move is ignored while the computer's reply is pending, once
    /// the game is over, and for occupied or out-of-range squares.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, index: usize) -> Option<Effect> {
        if self.awaiting_computer {
            debug!(index, "ignoring input while computer move is pending");
            return None;
        }
        if let Err(error) = self.game.make_move(index) {
            debug!(index, %error, "move ignored");
            return None;
        }
        self.maybe_schedule_computer()
    }

    /// Switches mode, resetting the board unconditionally.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) -> Option<Effect> {
        info!(mode = mode.name(), "mode selected");
        self.reset(mode)
    }

    /// Restarts in the current mode, discarding any game in progress.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Option<Effect> {
        let mode = self.game.state().mode();
        self.reset(mode)
    }

    /// Applies a deferred computer move once its timer elapses.
    ///
    /// A move scheduled before the most recent reset is discarded.
    #[instrument(skip(self))]
    pub fn apply_deferred(&mut self, mv: DeferredMove) {
        if mv.epoch != self.epoch {
            warn!(?mv, epoch = self.epoch, "discarding stale computer move");
            return;
        }
        self.awaiting_computer = false;
        if let Err(error) = self.game.make_move(mv.index) {
            warn!(?mv, %error, "deferred move no longer valid");
        }
        // The computer never follows itself: after its move it is either
        // the human's turn or the game is over.
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> BoardView {
        let state = self.game.state();
        let locked = self.awaiting_computer || state.status() != &GameStatus::InProgress;
        let cells = std::array::from_fn(|index| {
            let mark = match state.board().get(index) {
                Some(Square::Occupied(mark)) => Some(mark),
                _ => None,
            };
            CellView {
                mark,
                enabled: !locked && mark.is_none(),
            }
        });
        BoardView {
            cells,
            status: self.game.status_message(),
            mode: state.mode(),
            thinking: self.awaiting_computer,
        }
    }

    fn reset(&mut self, mode: GameMode) -> Option<Effect> {
        // Invalidate any pending deferred move before touching the board.
        self.epoch += 1;
        self.awaiting_computer = false;
        self.game.reset(mode);
        // X opens, so this only fires if the computer ever owns X.
        self.maybe_schedule_computer()
    }

    fn maybe_schedule_computer(&mut self) -> Option<Effect> {
        if self.game.state().status() != &GameStatus::InProgress {
            return None;
        }
        if self.game.state().mode() != GameMode::HumanVsComputer
            || self.game.state().current_player() != COMPUTER_MARK
        {
            return None;
        }
        // Select at dispatch time; a full board yields no move.
        let index = self.selector.select_move(self.game.state().board())?;
        self.awaiting_computer = true;
        debug!(index, opponent = self.selector.name(), "scheduling computer move");
        Some(Effect::ScheduleComputerMove(DeferredMove {
            index,
            epoch: self.epoch,
        }))
    }
}
