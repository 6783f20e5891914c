//! Board structure

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};

/// Game board: one bitboard per color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board with no stones at all
    pub fn empty() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Starting position: the four center cells, diagonally paired
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.place_stone(Pos::new(3, 3), Stone::White);
        board.place_stone(Pos::new(4, 4), Stone::White);
        board.place_stone(Pos::new(3, 4), Stone::Black);
        board.place_stone(Pos::new(4, 3), Stone::Black);
        board
    }

    /// Build a board from rows of `B`, `W` and `.` characters.
    ///
    /// Any other character counts as empty; missing rows or columns are empty.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate().take(BOARD_SIZE) {
            for (col, ch) in line.chars().enumerate().take(BOARD_SIZE) {
                let stone = match ch {
                    'B' | 'b' | 'X' | 'x' => Stone::Black,
                    'W' | 'w' | 'O' | 'o' => Stone::White,
                    _ => continue,
                };
                board.place_stone(Pos::new(row as u8, col as u8), stone);
            }
        }
        board
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Put a stone on a cell, replacing whatever was there.
    /// Placing `Stone::Empty` clears the cell.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.remove_stone(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Number of stones of a color; for `Empty`, the number of free cells
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black.count(),
            Stone::White => self.white.count(),
            Stone::Empty => TOTAL_CELLS as u32 - self.stone_count(),
        }
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Same position with the two colors exchanged
    pub fn swapped(&self) -> Board {
        Board {
            black: self.white,
            white: self.black,
        }
    }

    /// Full grid snapshot, indexed `[row][col]`, for renderers
    pub fn cells(&self) -> [[Stone; BOARD_SIZE]; BOARD_SIZE] {
        let mut cells = [[Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        for pos in Pos::all() {
            cells[pos.row as usize][pos.col as usize] = self.get(pos);
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
