//! Engine and game configuration

use std::{fs, path::Path};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::Side;

/// Default search depth; with the human opening, eight plies reach the end
/// of every game.
pub const DEFAULT_MAX_DEPTH: u32 = 8;

/// No game lasts longer than this many plies
pub const MAX_PLIES: u32 = 9;

/// Which search routine the engine runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SearchStrategy {
    /// Negamax with alpha-beta pruning
    #[default]
    AlphaBeta,
    /// Negamax without pruning
    Full,
    /// Alpha-beta below each root move, root moves searched in parallel
    ParallelRoot,
}

/// Configuration for the search engine.
///
/// # Examples
///
/// ```
/// use tictactoe_negamax::config::{EngineConfig, SearchStrategy};
///
/// let config = EngineConfig::default()
///     .with_max_depth(4)
///     .with_strategy(SearchStrategy::Full);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Plies to search below the current position (1-9)
    pub max_depth: u32,
    pub strategy: SearchStrategy,
}

impl EngineConfig {
    /// Set the search depth.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the search routine.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Reject depths the engine cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`](crate::Error::InvalidConfiguration)
    /// when `max_depth` is 0 (no move would be chosen) or exceeds
    /// [`MAX_PLIES`].
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_depth == 0 || self.max_depth > MAX_PLIES {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "max_depth must be between 1 and {MAX_PLIES}, got {}",
                    self.max_depth
                ),
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strategy: SearchStrategy::default(),
        }
    }
}

/// Configuration for a playing session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub engine: EngineConfig,
    /// Side that opens every game
    pub first_player: Side,
}

impl GameConfig {
    /// Set the engine configuration.
    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Set the side that opens each game.
    pub fn with_first_player(mut self, first_player: Side) -> Self {
        self.first_player = first_player;
        self
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.engine.validate()
    }

    /// Load a configuration from a JSON file; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid JSON, or holds
    /// an invalid engine configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| crate::Error::Io {
            operation: format!("read config '{}'", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            first_player: Side::Human,
        }
    }
}
