use super::{SettingsBackend, SettingsError};
use crate::value::RawValue;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

type Table = BTreeMap<String, RawValue>;

/// Settings persisted as a flat TOML table, written through on every change.
pub struct FileBackend {
    path: PathBuf,
    table: Table,
}

impl FileBackend {
    /// Load the settings file, creating an empty one if it doesn't exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let table: Table = confy::load_path(&path)?;
        info!("Load settings from {:?}", path);
        Ok(Self { path, table })
    }

    /// Like [`open`](Self::open), but an unreadable file starts out empty.
    /// The next write replaces it.
    pub fn open_or_empty(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(&path) {
            Ok(backend) => backend,
            Err(e) => {
                warn!("Failed to load settings from {:?}, using defaults: {}", path, e);
                Self {
                    path,
                    table: Table::new(),
                }
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), SettingsError> {
        confy::store_path(&self.path, &self.table)?;
        debug!("Save settings to {:?}", self.path);
        Ok(())
    }
}

impl SettingsBackend for FileBackend {
    fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<RawValue> {
        self.table.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: RawValue) -> Result<(), SettingsError> {
        self.table.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<(), SettingsError> {
        if self.table.remove(key).is_none() {
            return Ok(());
        }
        self.flush()
    }
}
