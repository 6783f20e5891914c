//! GUI module for the Reversi game
//!
//! A native presentation adapter using egui/eframe. The adapter only reads
//! the grid and forwards clicks and hovers to [`GameState`].

mod app;
mod board_view;
pub mod deferred;
mod game_state;
mod theme;

pub use app::ReversiApp;
pub use deferred::{AiMove, DeferredMove, DeferredPoll};
pub use game_state::{AiState, GameState, MoveTimer};
