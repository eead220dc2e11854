//! Simulator configuration, deserialized from TOML the way the
//! teacher's own `Config` is: `serde::Deserialize` plus
//! `#[serde(default = "fn")]` named default functions.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;

fn default_max_cycles() -> u64 {
    10_000
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub trace: bool,
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            trace: false,
            max_cycles: default_max_cycles(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
}

impl Config {
    /// Reads and parses a TOML config file; a missing file or parse
    /// failure surfaces a typed [`ConfigError`] rather than panicking.
    pub fn load(path: &str) -> Result<Config, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}
