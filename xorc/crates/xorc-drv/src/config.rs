//! Configuration module for the xorc driver.
//!
//! Settings come from `xorc.toml`. Command-line flags override them.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::error::{DrvError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "xorc.toml";

/// How `xorc tokens` prints the token stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned line per token.
    #[default]
    Text,
    /// A JSON array of token objects.
    Json,
}

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Token-dump configuration.
    #[serde(default)]
    pub tokens: TokensConfig,
}

/// Options for `xorc tokens`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Print whitespace and comment tokens.
    #[serde(default = "default_true")]
    pub trivia: bool,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_true() -> bool {
    true
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            trivia: true,
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Looks in the current directory, then in `<config dir>/xorc/`.
    /// Returns the default configuration if neither has a config file.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path, which must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DrvError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| DrvError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the user configuration directory.
    fn check_user_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("xorc").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
