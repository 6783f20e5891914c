use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{candidate_moves, MovePolicy};
use crate::board::{Board, Pos, Stone};

/// Picks uniformly at random among the legal moves.
///
/// Capture sizes are available from [`candidate_moves`] but play no part in
/// the choice.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new() -> Self {
        RandomPolicy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic policy for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        RandomPolicy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS entropy otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl MovePolicy for RandomPolicy {
    fn select_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        let candidates = candidate_moves(board, color);
        if candidates.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..candidates.len());
        Some(candidates[idx].0)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
