//! Configuration loading
//!
//! Reads `{config_dir}/kb-client/config.toml`. A missing file or missing
//! fields fall back to defaults; a malformed file is an error.

use std::path::{Path, PathBuf};

pub mod types;

pub use types::{Config, NotificationConfig, SearchConfig, ServerConfig};

use crate::error::KbError;

/// Location of the config file, if a config directory exists on this platform.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kb-client").join("config.toml"))
}

impl Config {
    /// Load the configuration from the default location.
    pub fn load() -> Result<Self, KbError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, KbError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(KbError::Io(e)),
        };

        toml::from_str(&content).map_err(|e| KbError::Config(e.to_string()))
    }
}
