//! Controller scenarios: deferred computer moves, input gating, and reset.

use simply_tictactoe::{
    Board, COMPUTER_MARK, DeferredMove, Effect, GameController, GameMode, GameStatus, Mark,
    MoveSelector, RandomSelector, Square, THINKING_DELAY, spawn_deferred_move,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Opponent that plays a scripted sequence of indices.
struct Scripted {
    moves: Vec<usize>,
    next: usize,
}

impl Scripted {
    fn new(moves: Vec<usize>) -> Self {
        Self { moves, next: 0 }
    }
}

impl MoveSelector for Scripted {
    fn select_move(&mut self, _board: &Board) -> Option<usize> {
        let mv = self.moves.get(self.next).copied();
        self.next += 1;
        mv
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

fn pvc(seed: u64) -> GameController {
    GameController::new(GameMode::HumanVsComputer, Box::new(RandomSelector::seeded(seed)))
}

fn pvp() -> GameController {
    GameController::new(GameMode::HumanVsHuman, Box::new(RandomSelector::seeded(0)))
}

#[test]
fn test_computer_reply_scheduled_on_an_empty_square() {
    let mut ctrl = pvc(7);

    let effect = ctrl.submit_move(0).expect("computer move should be scheduled");
    let Effect::ScheduleComputerMove(mv) = effect;

    // Chosen at dispatch time from the squares that were empty then.
    assert_ne!(mv.index, 0);
    assert!(ctrl.game().state().board().is_empty(mv.index));
    assert!(ctrl.awaiting_computer());
    assert_eq!(ctrl.game().state().current_player(), COMPUTER_MARK);

    // The board is locked until the deferred move lands.
    assert!(ctrl.submit_move(1).is_none());
    assert_eq!(ctrl.game().state().history().len(), 1);

    ctrl.apply_deferred(mv);
    assert!(!ctrl.awaiting_computer());
    assert_eq!(ctrl.game().state().current_player(), Mark::X);
    assert_eq!(ctrl.game().state().history().len(), 2);
    assert_eq!(
        ctrl.game().state().board().get(mv.index),
        Some(Square::Occupied(Mark::O))
    );
}

#[test]
fn test_human_vs_human_never_schedules() {
    let mut ctrl = pvp();

    assert!(ctrl.submit_move(0).is_none());
    assert!(ctrl.submit_move(1).is_none());
    assert_eq!(ctrl.game().state().current_player(), Mark::X);
    assert_eq!(ctrl.game().state().history().len(), 2);
}

#[test]
fn test_computer_never_follows_itself() {
    let mut ctrl = GameController::new(GameMode::HumanVsComputer, Box::new(Scripted::new(vec![4])));

    let Effect::ScheduleComputerMove(mv) = ctrl.submit_move(0).unwrap();
    ctrl.apply_deferred(mv);

    // After the computer's move it is the human's turn again; nothing
    // more was scheduled and input is open.
    assert!(!ctrl.awaiting_computer());
    assert_eq!(ctrl.game().state().current_player(), Mark::X);
    assert!(ctrl.view().cells[1].enabled);
}

#[test]
fn test_occupied_square_is_a_no_op() {
    let mut ctrl = pvp();
    ctrl.submit_move(4);

    let before = ctrl.game().state().clone();
    assert!(ctrl.submit_move(4).is_none());
    assert_eq!(ctrl.game().state(), &before);
}

#[test]
fn test_terminal_state_locks_every_cell() {
    let mut ctrl = pvp();
    for index in [0, 1, 4, 2, 8] {
        ctrl.submit_move(index);
    }

    assert_eq!(ctrl.game().state().status(), &GameStatus::Won(Mark::X));
    let view = ctrl.view();
    assert_eq!(view.status, "X Wins!");
    assert!(view.cells.iter().all(|cell| !cell.enabled));

    // Absorbing until reset.
    assert!(ctrl.submit_move(3).is_none());
    assert_eq!(ctrl.game().state().status(), &GameStatus::Won(Mark::X));
}

#[test]
fn test_restart_mid_game_clears_and_reactivates() {
    let mut ctrl = pvp();
    ctrl.submit_move(0);
    ctrl.submit_move(1);

    assert!(ctrl.restart().is_none());

    let view = ctrl.view();
    assert_eq!(view.status, "Current Turn: X");
    assert_eq!(view.mode, GameMode::HumanVsHuman);
    assert!(view.cells.iter().all(|cell| cell.mark.is_none() && cell.enabled));
    assert_eq!(ctrl.game().state().current_player(), Mark::X);
}

#[test]
fn test_mode_switch_resets_the_board() {
    let mut ctrl = pvp();
    ctrl.submit_move(0);

    assert!(ctrl.set_mode(GameMode::HumanVsComputer).is_none());

    assert_eq!(ctrl.game().state().mode(), GameMode::HumanVsComputer);
    assert!(ctrl.game().state().history().is_empty());
    assert_eq!(ctrl.view().status, "Current Turn: X");
}

#[test]
fn test_reset_discards_a_pending_computer_move() {
    let mut ctrl = GameController::new(GameMode::HumanVsComputer, Box::new(Scripted::new(vec![8])));

    let Effect::ScheduleComputerMove(mv) = ctrl.submit_move(0).unwrap();
    assert!(ctrl.awaiting_computer());

    // Restart while the timer is still pending.
    assert!(ctrl.restart().is_none());
    assert!(!ctrl.awaiting_computer());

    // The stale move never lands on the reset board.
    ctrl.apply_deferred(mv);
    assert!(ctrl.game().state().board().squares().iter().all(|s| *s == Square::Empty));
    assert!(ctrl.game().state().history().is_empty());
    assert_eq!(ctrl.view().status, "Current Turn: X");
}

#[test]
fn test_mode_switch_discards_a_pending_computer_move() {
    let mut ctrl = GameController::new(GameMode::HumanVsComputer, Box::new(Scripted::new(vec![5])));

    let Effect::ScheduleComputerMove(mv) = ctrl.submit_move(0).unwrap();
    ctrl.set_mode(GameMode::HumanVsHuman);

    ctrl.apply_deferred(mv);
    assert!(ctrl.game().state().board().squares().iter().all(|s| *s == Square::Empty));

    // The fresh game accepts moves normally.
    assert!(ctrl.submit_move(5).is_none());
    assert_eq!(ctrl.game().state().history().len(), 1);
}

#[test]
fn test_view_serializes_for_external_renderers() {
    let ctrl = pvp();
    let json = serde_json::to_value(ctrl.view()).unwrap();

    assert_eq!(json["status"], "Current Turn: X");
    assert_eq!(json["thinking"], false);
    assert_eq!(json["cells"].as_array().unwrap().len(), 9);
    assert_eq!(json["cells"][0]["enabled"], true);
    assert_eq!(json["cells"][0]["mark"], serde_json::Value::Null);
}

#[tokio::test(start_paused = true)]
async fn test_deferred_move_waits_out_the_delay() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mv = DeferredMove { index: 4, epoch: 0 };
    spawn_deferred_move(mv, THINKING_DELAY, tx);
    tokio::task::yield_now().await;

    // One tick short of the deferral: nothing may land yet.
    tokio::time::advance(THINKING_DELAY - Duration::from_millis(1)).await;
    tokio::task::yield_now().await;
    assert!(rx.try_recv().is_err());

    tokio::time::advance(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(rx.try_recv().expect("deferred move should have fired"), mv);
}

#[tokio::test(start_paused = true)]
async fn test_full_deferral_round_trip() {
    let mut ctrl = GameController::new(GameMode::HumanVsComputer, Box::new(Scripted::new(vec![6])));
    let (tx, mut rx) = mpsc::unbounded_channel();

    let Effect::ScheduleComputerMove(mv) = ctrl.submit_move(0).unwrap();
    spawn_deferred_move(mv, THINKING_DELAY, tx);
    tokio::task::yield_now().await;

    // Humans cannot move while the timer runs.
    assert!(ctrl.submit_move(1).is_none());

    tokio::time::advance(THINKING_DELAY + Duration::from_millis(1)).await;
    tokio::task::yield_now().await;

    let elapsed = rx.try_recv().expect("deferred move should have fired");
    ctrl.apply_deferred(elapsed);

    assert_eq!(ctrl.game().state().board().get(6), Some(Square::Occupied(Mark::O)));
    assert_eq!(ctrl.game().state().current_player(), Mark::X);
}
