// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config file loading and settings resolution.
//!
//! Precedence: command-line flag > environment > config file > default.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Locale code used when none is given on the command line.
    pub locale: Option<String>,
    /// Phrase table file or directory, relative to the config file.
    pub phrases: Option<PathBuf>,
}

impl Config {
    /// Load the config at `path`. A missing file yields the default config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        if let (Some(phrases), Some(dir)) = (&config.phrases, path.parent()) {
            if phrases.is_relative() {
                config.phrases = Some(dir.join(phrases));
            }
        }
        Ok(config)
    }
}

/// One layer of optional settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layer {
    pub locale: Option<String>,
    pub phrases: Option<PathBuf>,
}

impl From<Config> for Layer {
    fn from(config: Config) -> Self {
        Self {
            locale: config.locale,
            phrases: config.phrases,
        }
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub locale: String,
    /// Extra phrase tables merged over the built-in bundle.
    pub phrases: Option<PathBuf>,
}

impl Settings {
    /// Merge layers, highest precedence first.
    pub fn resolve(layers: &[Layer]) -> Self {
        let locale = layers
            .iter()
            .find_map(|l| l.locale.clone())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let phrases = layers.iter().find_map(|l| l.phrases.clone());
        Self { locale, phrases }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
