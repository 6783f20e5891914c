//! Reversi (Othello) engine with a random-move opponent
//!
//! - Standard 8x8 board, Black moves first from the four-stone center seed
//! - A move must flip at least one line of opponent stones
//! - A player without a legal move passes
//! - The game ends when one color is gone or the board is full; the larger
//!   stone count wins
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Capture resolution and end-of-game scoring
//! - [`engine`]: Turn state machine owning the position
//! - [`policy`]: Move selection for the automated player
//! - [`config`]: TOML configuration
//! - [`ui`]: egui presentation adapter and game session
//!
//! # Quick Start
//!
//! ```
//! use reversi::{Engine, MovePolicy, RandomPolicy, Stone};
//!
//! let mut engine = Engine::new();
//! let mut ai = RandomPolicy::with_seed(7);
//!
//! // Play the AI against itself to the end
//! while !engine.is_terminal() {
//!     let color = engine.current_player();
//!     let pos = ai.select_move(engine.board(), color).unwrap();
//!     engine.apply_move(pos).unwrap();
//! }
//!
//! println!("{}", engine.outcome().unwrap());
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod policy;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::AppConfig;
pub use engine::{Engine, MoveReport, Status};
pub use error::{ConfigError, MoveError};
pub use policy::{MovePolicy, RandomPolicy};
pub use rules::Outcome;
