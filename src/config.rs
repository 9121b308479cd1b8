//! Where the preferences live on disk
//!
//! The settings file is managed by `confy` in the OS-specific config
//! directory; other application data goes under the `directories` data dir.

use crate::backend::FileBackend;
use crate::constant::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, SETTINGS_NAME};
use crate::settings::ApplicationSettings;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No home directory found for this user")]
    NoConfigDir,
}

pub struct Config {
    settings_path: PathBuf,
}

impl Config {
    /// Resolve the default settings file location
    pub fn load() -> Result<Self, ConfigError> {
        let settings_path = confy::get_configuration_file_path(APP_NAME, SETTINGS_NAME)?;
        info!("Using settings file {:?}", settings_path);
        Ok(Self { settings_path })
    }

    /// Use an explicit settings file instead of the platform location
    pub fn with_settings_path(path: impl Into<PathBuf>) -> Self {
        Self {
            settings_path: path.into(),
        }
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Get the application data directory
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Open the persisted preferences. An unreadable file reads as all defaults.
    pub fn open_settings(&self) -> ApplicationSettings<FileBackend> {
        ApplicationSettings::new(FileBackend::open_or_empty(&self.settings_path))
    }
}
