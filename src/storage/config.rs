//! Configuration handling for the car inventory
//!
//! Settings come from built-in defaults, then the global config file
//! (`~/.config/car-inventory/config.toml` or the platform equivalent), or an
//! explicit file given with `--config`. Command-line flags override both.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{ValidationRules, BODY_END};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Combined configuration for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inventory records file
    pub input: PathBuf,

    /// Where rejected lines are written (recreated on every load)
    pub reject_log: PathBuf,

    /// Maximum number of accepted records kept in memory
    pub capacity: usize,

    /// Field check limits
    pub rules: ValidationRules,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("car_records.txt"),
            reject_log: PathBuf::from("invalid_records.txt"),
            capacity: 100,
            rules: ValidationRules::default(),
        }
    }
}

impl Config {
    /// Loads configuration from `explicit` if given, otherwise from the global config file
    ///
    /// Values are not checked here; call [`Config::validate`] once any
    /// overrides have been applied.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::load_global(),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "car-inventory", "car-inventory")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn load_global() -> Result<Self> {
        let config_path = match Self::global_config_dir() {
            Some(dir) => dir.join("config.toml"),
            None => return Ok(Self::default()),
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::from_file(&config_path)
    }

    /// Reads and parses a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parses TOML content; missing keys keep their defaults
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Rejects settings that would make every record fail or nothing load
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".to_string()));
        }

        if self.rules.id_length < BODY_END {
            return Err(ConfigError::Invalid(format!(
                "rules.id_length must be at least {}, got {}",
                BODY_END, self.rules.id_length
            )));
        }

        if self.rules.min_model_len == 0 {
            return Err(ConfigError::Invalid("rules.min_model_len must be at least 1".to_string()));
        }

        if !self.rules.price_floor.is_finite() || self.rules.price_floor < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rules.price_floor must be a non-negative number, got {}",
                self.rules.price_floor
            )));
        }

        Ok(())
    }
}
