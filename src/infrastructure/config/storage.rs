//! On-disk configuration and the remembered snapshot path.
//!
//! The config file is only read; chatcell never writes one on its own. The
//! state file is rewritten after every run that resolves a snapshot.

use super::app_config::AppConfig;
use super::state_config::StateConfig;
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";
const APP_NAME: &str = "chatcell";
const CONFIG_FILE_NAME: &str = "config.toml";
const STATE_FILE_NAME: &str = "state.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("config file {0} does not exist")]
    MissingConfig(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Locates the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` if there is no home directory.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Loads `config.toml`, or the file given with `--config`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error. Unparsable files fall back to the defaults with a warning.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing or a file cannot be read.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        let mut config = match read_toml::<AppConfig>(&path)? {
            Some(config) => config,
            None if path_override.is_some() => return Err(ConfigError::MissingConfig(path)),
            None => {
                debug!(path = %path.display(), "No config file, using defaults");
                AppConfig::default()
            }
        };
        config.ui.sanitize();
        Ok(config)
    }

    /// Loads the remembered state, forgetting a snapshot that no longer exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the state file exists but cannot be read.
    pub fn load_state(&self) -> Result<StateConfig, ConfigError> {
        let mut state = read_toml::<StateConfig>(&self.config_dir.join(STATE_FILE_NAME))?
            .unwrap_or_default();

        if let Some(path) = state.last_snapshot.take_if(|path| !path.exists()) {
            debug!(path = %path.display(), "Remembered snapshot is gone");
        }
        Ok(state)
    }

    /// Atomically replaces the state file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory or file cannot be written.
    pub fn save_state(&self, state: &StateConfig) -> Result<(), ConfigError> {
        fs::create_dir_all(&self.config_dir)?;
        let content = toml::to_string_pretty(state)?;

        let mut temp_file = tempfile::NamedTempFile::new_in(&self.config_dir)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file
            .persist(self.config_dir.join(STATE_FILE_NAME))
            .map_err(|e| e.error)?;

        debug!(dir = %self.config_dir.display(), "State saved");
        Ok(())
    }
}

/// Reads a TOML file; `None` when it does not exist.
fn read_toml<T: DeserializeOwned + Default>(path: &Path) -> Result<Option<T>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let value = toml::from_str(&content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Unparsable file, using defaults");
        T::default()
    });
    Ok(Some(value))
}
