//! Move selection for the automated player

mod random;

pub use random::RandomPolicy;

use crate::board::{Board, Pos, Stone};
use crate::rules::capture_set;

/// Interface for automated players.
///
/// `Send` so a policy can be moved onto the thread that computes a
/// deferred move.
pub trait MovePolicy: Send {
    /// Pick a move for `color`, or `None` when it has no legal move.
    fn select_move(&mut self, board: &Board, color: Stone) -> Option<Pos>;

    /// Display name
    fn name(&self) -> &str;
}

/// Every legal move for `color` paired with the number of stones it flips
pub fn candidate_moves(board: &Board, color: Stone) -> Vec<(Pos, usize)> {
    Pos::all()
        .filter_map(|pos| {
            let captured = capture_set(board, pos, color).len();
            (captured > 0).then_some((pos, captured))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_moves_opening() {
        let candidates = candidate_moves(&Board::new(), Stone::Black);
        assert_eq!(candidates.len(), 4);
        assert!(candidates.iter().all(|&(_, flips)| flips == 1));
    }

    #[test]
    fn test_candidate_moves_none() {
        let board = Board::from_rows(&["BB......"]);
        assert!(candidate_moves(&board, Stone::White).is_empty());
    }
}
