//! Configuration loading for BowlScore.
//!
//! The config file lives at `~/.bowlscore/config.toml` and is optional; every
//! field has a default.
//!
//! ```toml
//! [input]
//! strike_tokens = ["X", "x"]
//!
//! [output]
//! format = "sheet"
//! ascii_only = false
//! ```

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment override for the output format.
pub const FORMAT_ENV_VAR: &str = "BOWLSCORE_FORMAT";

#[derive(Debug, Default, Deserialize)]
pub struct BowlScoreConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Roll entry settings.
#[derive(Debug, Default, Deserialize)]
pub struct InputConfig {
    /// Tokens accepted as "all ten pins". Replaces the defaults when set.
    pub strike_tokens: Option<Vec<String>>,
}

/// Scoresheet output settings.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// "sheet" or "json".
    pub format: Option<String>,
    /// Draw the scoresheet with plain ASCII rules.
    #[serde(default)]
    pub ascii_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Sheet,
    Json,
}

impl OutputFormat {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sheet" | "table" => Some(OutputFormat::Sheet),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_config(config: Option<&BowlScoreConfig>) -> Option<Self> {
        let raw = config
            .and_then(|cfg| cfg.output.as_ref())
            .and_then(|output| output.format.as_ref())?;
        let format = Self::parse(raw);
        if format.is_none() {
            tracing::warn!("Unknown output format in config: {}", raw);
        }
        format
    }

    #[must_use]
    pub fn from_env() -> Option<Self> {
        match env::var(FORMAT_ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(_) => None,
        }
    }
}

impl BowlScoreConfig {
    /// Load from the default location. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Configured strike tokens, if any were set.
    #[must_use]
    pub fn strike_tokens(&self) -> Option<&[String]> {
        self.input
            .as_ref()
            .and_then(|input| input.strike_tokens.as_deref())
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.output.as_ref().is_some_and(|output| output.ascii_only)
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".bowlscore").join("config.toml"))
}
