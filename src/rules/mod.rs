//! Game rules for Reversi
//!
//! - Capture resolution and move legality
//! - End-of-game detection and scoring

pub mod capture;
pub mod outcome;

// Re-exports for convenient access
pub use capture::{
    capture_set, execute_captures, has_legal_move, is_legal, legal_moves, DIRECTIONS,
};
pub use outcome::{check_outcome, Outcome};
