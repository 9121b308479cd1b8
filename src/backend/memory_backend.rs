use super::{SettingsBackend, SettingsError};
use crate::value::RawValue;
use std::collections::BTreeMap;

/// Non-persistent backend. Counts mutations so callers can tell a no-op from a write.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    values: BTreeMap<String, RawValue>,
    writes: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` and `remove` calls received so far
    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, RawValue)> for MemoryBackend {
    fn from_iter<I: IntoIterator<Item = (K, RawValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            writes: 0,
        }
    }
}

impl SettingsBackend for MemoryBackend {
    fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<RawValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: RawValue) -> Result<(), SettingsError> {
        self.writes += 1;
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SettingsError> {
        self.writes += 1;
        self.values.remove(key);
        Ok(())
    }
}
