use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Largest dimension count offered; line enumeration grows as `4^D`.
pub const MAX_DIMENSION: usize = 8;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub input: InputConfig,
    pub display: DisplayConfig,
}

/// Unset values are asked for interactively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub dimension: Option<usize>,
    pub lock_center: Option<bool>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Tries a person gets before a random move is made for them.
    pub max_attempts: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig { max_attempts: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { color: true }
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
        if let Some(dimension) = self.game.dimension {
            validate_dimension(dimension)?;
        }
        if self.input.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "input.max_attempts must be > 0".into(),
            ));
        }
        Ok(())
    }
}

pub fn validate_dimension(dimension: usize) -> Result<(), ConfigError> {
    if !(2..=MAX_DIMENSION).contains(&dimension) {
        return Err(ConfigError::Validation(format!(
            "game.dimension must be between 2 and {}, got {}",
            MAX_DIMENSION, dimension
        )));
    }
    Ok(())
}
