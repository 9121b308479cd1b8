//! Durable key-value storage underneath the preference store.

pub mod file_backend;
pub mod memory_backend;

pub use file_backend::FileBackend;
pub use memory_backend::MemoryBackend;

use crate::value::RawValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Confy(#[from] confy::ConfyError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown preference: {0}")]
    UnknownKey(String),

    #[error("Invalid {expected} for {key}: {value:?}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    #[error("Settings storage is read-only")]
    ReadOnly,
}

/// Flat string-keyed storage the preference store reads and writes through.
///
/// Reads are infallible: an unreadable value is the same as an absent one.
pub trait SettingsBackend {
    fn contains(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<RawValue>;

    fn set(&mut self, key: &str, value: RawValue) -> Result<(), SettingsError>;

    fn remove(&mut self, key: &str) -> Result<(), SettingsError>;
}

impl<B: SettingsBackend + ?Sized> SettingsBackend for Box<B> {
    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn get(&self, key: &str) -> Option<RawValue> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: RawValue) -> Result<(), SettingsError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), SettingsError> {
        (**self).remove(key)
    }
}
