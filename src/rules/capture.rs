//! Capture resolution (directional flood capture)
//!
//! Placing a stone flips every straight run of opponent stones that is
//! closed off on the far side by a stone of the placing color.

use crate::board::{Board, Pos, Stone};

/// The 8 compass directions, in scan order
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Stones that would flip if `stone` were placed at `pos`.
///
/// Returns an empty vector when `pos` is occupied. Runs are concatenated in
/// [`DIRECTIONS`] order; each run is ordered from `pos` outward.
pub fn capture_set(board: &Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let mut captured = Vec::new();
    if !pos.in_bounds() || !board.is_empty(pos) || stone == Stone::Empty {
        return captured;
    }

    for &(dr, dc) in &DIRECTIONS {
        let start = captured.len();
        if !walk_direction(board, pos, stone, dr, dc, &mut captured) {
            captured.truncate(start);
        }
    }

    captured
}

/// Walk one direction pushing opponent stones; true if the run is closed by `stone`
fn walk_direction(
    board: &Board,
    pos: Pos,
    stone: Stone,
    dr: i32,
    dc: i32,
    out: &mut Vec<Pos>,
) -> bool {
    let opponent = stone.opponent();
    let mut cursor = pos;

    while let Some(next) = cursor.step(dr, dc) {
        match board.get(next) {
            Stone::Empty => return false,
            s if s == opponent => out.push(next),
            _ => return true,
        }
        cursor = next;
    }

    // Ran off the board
    false
}

/// Whether `stone` may be placed at `pos`
#[inline]
pub fn is_legal(board: &Board, pos: Pos, stone: Stone) -> bool {
    if !pos.in_bounds() || !board.is_empty(pos) || stone == Stone::Empty {
        return false;
    }
    let mut scratch = Vec::new();
    DIRECTIONS.iter().any(|&(dr, dc)| {
        scratch.clear();
        walk_direction(board, pos, stone, dr, dc, &mut scratch) && !scratch.is_empty()
    })
}

/// All legal cells for `stone`, row-major
pub fn legal_moves(board: &Board, stone: Stone) -> Vec<Pos> {
    Pos::all().filter(|&pos| is_legal(board, pos, stone)).collect()
}

#[inline]
pub fn has_legal_move(board: &Board, stone: Stone) -> bool {
    Pos::all().any(|pos| is_legal(board, pos, stone))
}

/// Place `stone` at `pos` and flip its capture set. Returns the flipped stones.
///
/// Does not check legality; callers go through the engine.
pub fn execute_captures(board: &mut Board, pos: Pos, stone: Stone) -> Vec<Pos> {
    let captured = capture_set(board, pos, stone);

    board.place_stone(pos, stone);
    for &cap_pos in &captured {
        board.place_stone(cap_pos, stone);
    }

    captured
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn as_set(positions: &[Pos]) -> HashSet<Pos> {
        positions.iter().copied().collect()
    }

    #[test]
    fn test_opening_capture() {
        let board = Board::new();
        let captured = capture_set(&board, Pos::new(2, 3), Stone::Black);
        assert_eq!(captured, vec![Pos::new(3, 3)]);
    }

    #[test]
    fn test_opening_legal_moves() {
        let board = Board::new();
        let moves = legal_moves(&board, Stone::Black);
        assert_eq!(
            moves,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );

        let moves = legal_moves(&board, Stone::White);
        assert_eq!(
            moves,
            vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
        );
    }

    #[test]
    fn test_occupied_cell_has_no_capture() {
        let board = Board::new();
        assert!(capture_set(&board, Pos::new(3, 3), Stone::Black).is_empty());
        assert!(capture_set(&board, Pos::new(3, 4), Stone::White).is_empty());
        assert!(!is_legal(&board, Pos::new(3, 3), Stone::Black));
    }

    #[test]
    fn test_multi_stone_run_ordered_outward() {
        // B W W W _
        let board = Board::from_rows(&["BWWW...."]);
        let captured = capture_set(&board, Pos::new(0, 4), Stone::Black);
        assert_eq!(captured, vec![Pos::new(0, 3), Pos::new(0, 2), Pos::new(0, 1)]);
    }

    #[test]
    fn test_run_into_empty_rejected() {
        // _ W W _ : nothing closes the run
        let board = Board::from_rows(&[".WW....."]);
        assert!(capture_set(&board, Pos::new(0, 0), Stone::Black).is_empty());
    }

    #[test]
    fn test_run_off_board_rejected() {
        // Opponent stones all the way to the edge
        let board = Board::from_rows(&[".WWWWWWW"]);
        assert!(capture_set(&board, Pos::new(0, 0), Stone::Black).is_empty());
    }

    #[test]
    fn test_adjacent_own_stone_captures_nothing() {
        let board = Board::from_rows(&[".B......"]);
        assert!(capture_set(&board, Pos::new(0, 0), Stone::Black).is_empty());
        assert!(!is_legal(&board, Pos::new(0, 0), Stone::Black));
    }

    #[test]
    fn test_multiple_directions() {
        let board = Board::from_rows(&[
            "B.B.....",
            "WWW.....",
            "........",
        ]);
        // Black at (2, 1): up through (1, 1) to (0, 1)? (0, 1) is empty -> no.
        // Diagonals (1, 0)->(0, -1) off board, (1, 2)->(0, 3) empty.
        assert!(capture_set(&board, Pos::new(2, 1), Stone::Black).is_empty());

        let board = Board::from_rows(&[
            "B.B.B...",
            ".WWW....",
            "..._....",
        ]);
        let captured = capture_set(&board, Pos::new(2, 3), Stone::Black);
        // up-left -> (1, 2) then (0, 1) empty: rejected
        // up -> (1, 3) then (0, 3) empty: rejected
        // up-right -> (1, 4) empty: rejected
        assert!(captured.is_empty());

        let captured = capture_set(&board, Pos::new(2, 2), Stone::Black);
        // up-left: (1, 1), (0, 0)=B accept; up: (1, 2), (0, 2)=B accept;
        // up-right: (1, 3), (0, 4)=B accept
        assert_eq!(
            as_set(&captured),
            as_set(&[Pos::new(1, 1), Pos::new(1, 2), Pos::new(1, 3)])
        );
    }

    #[test]
    fn test_empty_stone_never_captures() {
        let board = Board::new();
        assert!(capture_set(&board, Pos::new(2, 3), Stone::Empty).is_empty());
        assert!(!is_legal(&board, Pos::new(2, 3), Stone::Empty));
    }

    #[test]
    fn test_execute_captures() {
        let mut board = Board::new();
        let flipped = execute_captures(&mut board, Pos::new(2, 3), Stone::Black);
        assert_eq!(flipped, vec![Pos::new(3, 3)]);
        assert_eq!(board.get(Pos::new(2, 3)), Stone::Black);
        assert_eq!(board.get(Pos::new(3, 3)), Stone::Black);
        assert_eq!(board.count(Stone::Black), 4);
        assert_eq!(board.count(Stone::White), 1);
    }

    #[test]
    fn test_has_legal_move_matches_legal_moves() {
        let board = Board::from_rows(&["BBBBBBBB", "BBBBBBBB", "........"]);
        assert!(!has_legal_move(&board, Stone::White));
        assert!(legal_moves(&board, Stone::White).is_empty());
        assert!(has_legal_move(&Board::new(), Stone::White));
    }

    #[test]
    fn test_is_legal_agrees_with_capture_set() {
        let board = Board::from_rows(&[
            "..W.....",
            ".WBW....",
            "WBBBW...",
            ".W.W....",
        ]);
        for pos in Pos::all() {
            for stone in [Stone::Black, Stone::White] {
                assert_eq!(
                    is_legal(&board, pos, stone),
                    !capture_set(&board, pos, stone).is_empty(),
                    "mismatch at {pos} for {stone}"
                );
            }
        }
    }
}
