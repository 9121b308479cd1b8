//! Slate settings library
//!
//! Typed, persistent application preferences with defaults and change
//! notification, on top of a pluggable key-value backend.

pub mod backend;
pub mod config;
pub mod constant;
pub mod platform;
pub mod preference;
pub mod settings;
pub mod shortcut;
pub mod signal;
pub mod store;
pub mod value;

pub use backend::{FileBackend, MemoryBackend, SettingsBackend, SettingsError};
pub use config::{Config, ConfigError};
pub use preference::{Preference, PreferenceKey};
pub use settings::{ApplicationSettings, PreferenceEntry};
pub use shortcut::Shortcut;
pub use signal::SubscriptionId;
pub use store::PreferenceStore;
pub use value::{PreferenceValue, RawValue};
