//! Uniformly random move selection.

use super::MoveSelector;
use crate::game::Board;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use tracing::debug;

/// Computer opponent that picks uniformly among empty squares.
///
/// Each empty square is chosen with equal probability; with a fixed seed
/// the sequence of selections is deterministic.
#[derive(Debug, Clone)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Creates a selector seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a deterministic selector from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select_move(&mut self, board: &Board) -> Option<usize> {
        let open: Vec<usize> = board.empty_cells().collect();
        let choice = open.choose(&mut self.rng).copied();
        debug!(?choice, open = open.len(), "computer selected move");
        choice
    }

    fn name(&self) -> &str {
        "Computer"
    }
}
