//! User configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::task::DEFAULT_CAPACITY;

/// Settings loaded from `config.toml` in the data directory. Every field is
/// optional; a missing or partial file behaves like the defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub list: ListConfig,
}

/// Task list sizing and latch behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// The full latch is one-way by default: deleting tasks from a full list
    /// does not reopen it. Set this to let a delete release the latch.
    #[serde(default)]
    pub release_full_on_delete: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            release_full_on_delete: false,
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Config {
    /// Load config from `config.toml` under the given directory, falling
    /// back to defaults when no file exists.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join("config.toml");
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
