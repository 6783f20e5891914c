//! Board engine: the Reversi turn state machine
//!
//! The engine owns the board and the player to move, and is the only place
//! the position is mutated. Every accepted move is resolved completely before
//! [`Engine::apply_move`] returns:
//!
//! 1. **Validate**: the game must be in progress and the cell must capture
//! 2. **Place and flip**: the stone and its whole capture set take the mover's color
//! 3. **Terminal check**: one color wiped out, or the board is full
//! 4. **Turn switch**: the opponent moves next, unless it has no legal move
//!    (pass), in which case the mover goes again
//!
//! # Example
//!
//! ```
//! use reversi::{Engine, Pos, Stone};
//!
//! let mut engine = Engine::new();
//! let report = engine.apply_move(Pos::new(2, 3)).unwrap();
//!
//! assert_eq!(report.flipped, vec![Pos::new(3, 3)]);
//! assert_eq!(engine.count(Stone::Black), 4);
//! assert_eq!(engine.current_player(), Stone::White);
//! ```

use crate::board::{Board, Pos, Stone};
use crate::error::MoveError;
use crate::rules::{capture_set, check_outcome, execute_captures, has_legal_move, Outcome};

/// Game status. `Terminal` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Terminal(Outcome),
}

/// Everything that happened as a result of one accepted move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Color that moved
    pub color: Stone,
    /// Where the stone was placed
    pub pos: Pos,
    /// Stones flipped to `color`
    pub flipped: Vec<Pos>,
    /// Color that had to pass after this move, if any
    pub passed: Option<Stone>,
    /// Set when this move ended the game
    pub outcome: Option<Outcome>,
}

/// The Reversi board engine
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    current: Stone,
    status: Status,
    last_move: Option<Pos>,
}

impl Engine {
    /// Standard starting position, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Stone::Black,
            status: Status::InProgress,
            last_move: None,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// The position is normalized the same way a move would leave it: a
    /// finished board is terminal, and a side to move without a legal move
    /// hands the turn over (or ends the game if neither side can move).
    pub fn from_position(board: Board, to_move: Stone) -> Self {
        debug_assert!(to_move != Stone::Empty);
        let mut engine = Self {
            board,
            current: to_move,
            status: Status::InProgress,
            last_move: None,
        };

        if let Some(outcome) = check_outcome(&engine.board) {
            engine.status = Status::Terminal(outcome);
        } else if !has_legal_move(&engine.board, to_move) {
            if has_legal_move(&engine.board, to_move.opponent()) {
                engine.current = to_move.opponent();
            } else {
                engine.status = Status::Terminal(Outcome::score(&engine.board));
            }
        }

        engine
    }

    /// Back to the starting position
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, Status::Terminal(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Terminal(outcome) => Some(outcome),
            Status::InProgress => None,
        }
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        self.board.count(stone)
    }

    /// Stones `color` would flip by playing at `pos`
    pub fn capture_set(&self, pos: Pos, color: Stone) -> Vec<Pos> {
        capture_set(&self.board, pos, color)
    }

    pub fn is_legal(&self, pos: Pos, color: Stone) -> bool {
        crate::rules::is_legal(&self.board, pos, color)
    }

    pub fn legal_moves(&self, color: Stone) -> Vec<Pos> {
        crate::rules::legal_moves(&self.board, color)
    }

    /// Check a move for the player to move without applying it
    pub fn validate(&self, pos: Pos) -> Result<(), MoveError> {
        if !pos.in_bounds() {
            return Err(MoveError::OutOfBounds {
                x: pos.row as usize,
                y: pos.col as usize,
            });
        }
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }
        if !self.is_legal(pos, self.current) {
            return Err(MoveError::NoCaptures(pos));
        }
        Ok(())
    }

    /// Play the current player's stone at `pos`.
    ///
    /// Rejected moves leave the engine untouched.
    pub fn apply_move(&mut self, pos: Pos) -> Result<MoveReport, MoveError> {
        self.validate(pos)?;

        let color = self.current;
        let flipped = execute_captures(&mut self.board, pos, color);
        self.last_move = Some(pos);
        log::info!("{color} plays {pos}, flipping {}", flipped.len());

        let mut report = MoveReport {
            color,
            pos,
            flipped,
            passed: None,
            outcome: None,
        };

        if let Some(outcome) = check_outcome(&self.board) {
            self.finish(outcome);
            report.outcome = Some(outcome);
            return Ok(report);
        }

        let opponent = color.opponent();
        if has_legal_move(&self.board, opponent) {
            self.current = opponent;
        } else if has_legal_move(&self.board, color) {
            // Opponent passes, mover keeps the turn
            log::info!("{opponent} has no legal move and passes");
            report.passed = Some(opponent);
        } else {
            // Neither side can move with empty cells left
            let outcome = Outcome::score(&self.board);
            self.finish(outcome);
            report.outcome = Some(outcome);
        }

        Ok(report)
    }

    fn finish(&mut self, outcome: Outcome) {
        log::info!("game over: {outcome}");
        self.status = Status::Terminal(outcome);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
