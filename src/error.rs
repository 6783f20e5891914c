use std::path::PathBuf;

use crate::board::Pos;

/// Reasons a move is rejected. The game state is unchanged in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfBounds { x: usize, y: usize },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("placing at {0} captures nothing")]
    NoCaptures(Pos),

    #[error("game is over")]
    GameOver,

    #[error("not your turn")]
    NotYourTurn,

    #[error("AI is thinking")]
    AiThinking,
}

impl MoveError {
    /// Whether this is an ordinary illegal placement rather than a turn/state problem
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::Occupied(_) | MoveError::NoCaptures(_))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::NoCaptures(Pos::new(0, 0));
        assert_eq!(err.to_string(), "placing at (0, 0) captures nothing");

        let err = MoveError::OutOfBounds { x: 8, y: 2 };
        assert_eq!(err.to_string(), "coordinate (8, 2) is off the board");
    }

    #[test]
    fn test_illegal_move_class() {
        assert!(MoveError::Occupied(Pos::new(3, 3)).is_illegal_move());
        assert!(MoveError::NoCaptures(Pos::new(0, 0)).is_illegal_move());
        assert!(!MoveError::GameOver.is_illegal_move());
        assert!(!MoveError::NotYourTurn.is_illegal_move());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("think_time_ms must be <= 10000".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: think_time_ms must be <= 10000"
        );
    }
}
