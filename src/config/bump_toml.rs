//! Parsing for azp-bump.toml options files

use crate::config::options::RawOptions;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "azp-bump.toml";

/// Contents of an azp-bump.toml file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default bump options
    #[serde(default)]
    pub bump: RawOptions,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads `azp-bump.toml` from `dir` if it exists
    ///
    /// A missing file yields the empty configuration.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = Self::default_path(dir);
        if !path.is_file() {
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading options file");
        Self::load(path)
    }

    /// Returns the default options file path inside `dir`
    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_CONFIG_FILE)
    }
}
