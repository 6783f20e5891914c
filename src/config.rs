use std::path::Path;
use std::time::Duration;

use crate::board::Stone;
use crate::error::ConfigError;

/// Upper bound for the automated player's think time
pub const MAX_THINK_TIME_MS: u64 = 10_000;

/// Application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Color played by the human; the other color is automated
    pub human_color: Stone,
    /// Minimum delay before the automated move is applied
    pub think_time_ms: u64,
    /// Seed for the automated player; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            human_color: Stone::Black,
            think_time_ms: 500,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human_color == Stone::Empty {
            return Err(ConfigError::Validation(
                "human_color must be \"black\" or \"white\"".into(),
            ));
        }
        if self.think_time_ms > MAX_THINK_TIME_MS {
            return Err(ConfigError::Validation(format!(
                "think_time_ms must be <= {MAX_THINK_TIME_MS}"
            )));
        }
        Ok(())
    }

    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
    }

    pub fn ai_color(&self) -> Stone {
        self.human_color.opponent()
    }
}
