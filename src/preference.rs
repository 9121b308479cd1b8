use crate::value::PreferenceValue;
use std::fmt;

/// Identifies one stored value. Keys are case-sensitive and never reused.
pub type PreferenceKey = &'static str;

/// Compile-time description of a single preference: where it lives and
/// what it reads as when nothing has been stored.
pub struct Preference<T> {
    key: PreferenceKey,
    default: fn() -> T,
}

impl<T: PreferenceValue> Preference<T> {
    pub const fn new(key: PreferenceKey, default: fn() -> T) -> Self {
        Self { key, default }
    }

    pub const fn key(&self) -> PreferenceKey {
        self.key
    }

    /// Computed on every call, so platform-derived defaults follow the host.
    pub fn default_value(&self) -> T {
        (self.default)()
    }
}

impl<T> fmt::Debug for Preference<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preference").field("key", &self.key).finish()
    }
}
