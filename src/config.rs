//! Engine configuration read from `Engine.toml`
//!
//! Every field has a hard-coded default that matches the shipped file, so a
//! missing or broken file degrades to the built-in tuning.

use std::fs;
use std::path::Path;

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::board::Phase;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "Engine.toml";

/// Failure to load a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// All tunable engine parameters
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub placement: PlacementConfig,
}

/// Hard-tier search depths
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth while goats are still being placed
    pub placement_depth: u8,
    /// Depth once every goat is on the board
    pub movement_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            placement_depth: 4,
            movement_depth: 6,
        }
    }
}

impl SearchConfig {
    /// Search depth for the given phase
    pub fn depth_for(&self, phase: Phase) -> u8 {
        match phase {
            Phase::Placement => self.placement_depth,
            Phase::Movement => self.movement_depth,
        }
    }
}

/// Hard-tier goat placement tuning
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlacementConfig {
    /// Exclusive upper bound of the random perturbation (0 disables it)
    pub jitter: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self { jitter: 10 }
    }
}

impl EngineConfig {
    /// Loads configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads `Engine.toml` from the working directory
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::from_file(DEFAULT_CONFIG_PATH)
    }

    /// Attempts to load from file, falls back to hard-coded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            warn!(
                "could not load {} ({}), using built-in defaults",
                DEFAULT_CONFIG_PATH, e
            );
            Self::default()
        })
    }
}
