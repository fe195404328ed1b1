//! Game configuration loaded from TOML.

use crate::ai::{DecisionEngine, Strategy, UnknownLevel};
use crate::games::tictactoe::Player;
use crate::session::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a game session.
///
/// Every field has a default, so a partial file (or none at all) works.
///
/// ```toml
/// mode = "ai"
/// level = 1
/// engine_player = "O"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Two humans, or a human against the engine.
    mode: GameMode,

    /// Engine level: `0` random, `1` exhaustive search.
    level: u8,

    /// Side the engine plays.
    engine_player: Player,

    /// Seed for reproducible random play.
    #[setters(strip_option)]
    seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Ai,
            level: Strategy::ExhaustiveSearch.level(),
            engine_player: Player::PlayerB,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.strategy()?;

        info!(mode = %config.mode, level = config.level, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Strategy selected by `level`.
    pub fn strategy(&self) -> Result<Strategy, ConfigError> {
        Ok(Strategy::from_level(self.level)?)
    }

    /// Builds the engine described by this configuration.
    #[instrument(skip(self), fields(level = self.level, player = %self.engine_player))]
    pub fn build_engine(&self) -> Result<DecisionEngine, ConfigError> {
        let strategy = self.strategy()?;
        Ok(match self.seed {
            Some(seed) => DecisionEngine::with_seed(strategy, self.engine_player, seed),
            None => DecisionEngine::new(strategy, self.engine_player),
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<UnknownLevel> for ConfigError {
    #[track_caller]
    fn from(err: UnknownLevel) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.mode(), GameMode::Ai);
        assert_eq!(config.strategy().unwrap(), Strategy::ExhaustiveSearch);
        assert_eq!(*config.engine_player(), Player::PlayerB);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = 0\nengine_player = \"X\"").unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(config.strategy().unwrap(), Strategy::Random);
        assert_eq!(*config.engine_player(), Player::PlayerA);
        assert_eq!(*config.mode(), GameMode::Ai);
    }

    #[test]
    fn test_unknown_level_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "level = 5").unwrap();

        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Unknown engine level 5"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GameConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::default()
            .with_mode(GameMode::Pvp)
            .with_level(0)
            .with_seed(9);
        assert_eq!(*config.mode(), GameMode::Pvp);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(config.build_engine().unwrap().strategy(), Strategy::Random);
    }
}
