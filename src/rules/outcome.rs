//! End-of-game detection by stone count

use std::fmt;

use crate::board::{Board, Stone, TOTAL_CELLS};

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Draw {
        /// Stones per side
        stones: u32,
    },
    Winner {
        color: Stone,
        winner_count: u32,
        loser_count: u32,
    },
}

impl Outcome {
    /// Score the board: equal counts draw, otherwise the larger count wins
    pub fn from_counts(black: u32, white: u32) -> Self {
        use std::cmp::Ordering;
        match black.cmp(&white) {
            Ordering::Equal => Outcome::Draw { stones: black },
            Ordering::Greater => Outcome::Winner {
                color: Stone::Black,
                winner_count: black,
                loser_count: white,
            },
            Ordering::Less => Outcome::Winner {
                color: Stone::White,
                winner_count: white,
                loser_count: black,
            },
        }
    }

    pub fn score(board: &Board) -> Self {
        Self::from_counts(board.count(Stone::Black), board.count(Stone::White))
    }

    pub fn winner(&self) -> Option<Stone> {
        match self {
            Outcome::Winner { color, .. } => Some(*color),
            Outcome::Draw { .. } => None,
        }
    }

    /// The same result with colors exchanged
    pub fn mirrored(&self) -> Self {
        match *self {
            Outcome::Winner { color, winner_count, loser_count } => Outcome::Winner {
                color: color.opponent(),
                winner_count,
                loser_count,
            },
            draw => draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Draw { stones } => write!(f, "Draw ({stones} vs {stones})"),
            Outcome::Winner { color, winner_count, loser_count } => {
                write!(f, "{color} won ({winner_count} vs {loser_count})")
            }
        }
    }
}

/// Count-based terminal check: one color wiped out, or no empty cell left.
///
/// Returns the outcome when the position is over, `None` while play goes on.
pub fn check_outcome(board: &Board) -> Option<Outcome> {
    let black = board.count(Stone::Black);
    let white = board.count(Stone::White);

    if black == 0 || white == 0 || (black + white) as usize == TOTAL_CELLS {
        Some(Outcome::from_counts(black, white))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_not_terminal() {
        assert_eq!(check_outcome(&Board::new()), None);
    }

    #[test]
    fn test_no_white_left() {
        let board = Board::from_rows(&["BBB.....", "........"]);
        let outcome = check_outcome(&board).unwrap();
        assert_eq!(outcome.winner(), Some(Stone::Black));
        assert_eq!(outcome.to_string(), "Black won (3 vs 0)");
    }

    #[test]
    fn test_full_board_33_31() {
        let mut rows = vec!["BBBBBBBB"; 4];
        rows.push("BWWWWWWW");
        rows.extend(["WWWWWWWW"; 3]);
        let board = Board::from_rows(&rows);
        assert_eq!(board.count(Stone::Black), 33);
        assert_eq!(board.count(Stone::White), 31);

        let outcome = check_outcome(&board).unwrap();
        assert_eq!(
            outcome,
            Outcome::Winner { color: Stone::Black, winner_count: 33, loser_count: 31 }
        );
        assert_eq!(outcome.to_string(), "Black won (33 vs 31)");
    }

    #[test]
    fn test_full_board_draw() {
        let mut rows = vec!["BBBBBBBB"; 4];
        rows.extend(["WWWWWWWW"; 4]);
        let outcome = check_outcome(&Board::from_rows(&rows)).unwrap();
        assert_eq!(outcome, Outcome::Draw { stones: 32 });
        assert_eq!(outcome.winner(), None);
        assert_eq!(outcome.to_string(), "Draw (32 vs 32)");
    }

    #[test]
    fn test_empty_board_is_terminal_draw() {
        assert_eq!(check_outcome(&Board::empty()), Some(Outcome::Draw { stones: 0 }));
    }

    #[test]
    fn test_mirrored_outcome() {
        let board = Board::from_rows(&["WWB....."]);
        let outcome = Outcome::score(&board);
        let swapped = Outcome::score(&board.swapped());
        assert_eq!(outcome.mirrored(), swapped);
        assert_eq!(swapped.to_string(), "Black won (2 vs 1)");
    }
}
