//! Typed, notifying access to persisted preferences with default fallback.

use crate::backend::SettingsBackend;
use crate::preference::{Preference, PreferenceKey};
use crate::signal::{Signals, SubscriptionId};
use crate::value::PreferenceValue;
use std::cell::{Ref, RefCell};
use tracing::{debug, warn};

/// Reads fall back to each preference's default; writes skip values that
/// are already in effect and notify observers of the ones that aren't.
///
/// Methods take `&self` so observers holding the store can re-enter it
/// while being notified. The store is single-threaded; wrap it in one
/// mutex if it has to be shared.
pub struct PreferenceStore<B> {
    backend: RefCell<B>,
    signals: Signals,
}

impl<B: SettingsBackend> PreferenceStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: RefCell::new(backend),
            signals: Signals::new(),
        }
    }

    /// The stored value if there is one, otherwise the default
    pub fn get<T: PreferenceValue>(&self, pref: &Preference<T>) -> T {
        let stored = self.backend.borrow().get(pref.key());
        match stored {
            Some(raw) => T::from_raw(&raw),
            None => pref.default_value(),
        }
    }

    pub fn is_stored<T: PreferenceValue>(&self, pref: &Preference<T>) -> bool {
        self.backend.borrow().contains(pref.key())
    }

    /// Store `value` and notify observers, unless it is already the effective value.
    ///
    /// Returns whether the value changed.
    pub fn set<T: PreferenceValue>(&self, pref: &Preference<T>, value: T) -> bool {
        if self.get(pref) == value {
            return false;
        }

        let result = self.backend.borrow_mut().set(pref.key(), value.to_raw());
        if let Err(e) = result {
            warn!("Failed to persist {}: {}", pref.key(), e);
            if self.get(pref) != value {
                return false;
            }
        }

        debug!("Set {} to {:?}", pref.key(), value);
        self.signals.emit(pref.key());
        true
    }

    /// Forget the stored value so the default applies again.
    ///
    /// Observers are only notified if that changes the effective value.
    pub fn reset<T: PreferenceValue>(&self, pref: &Preference<T>) -> bool {
        let before = self.get(pref);
        if !self.remove_key(pref.key()) || self.get(pref) == before {
            return false;
        }

        debug!("Reset {} to its default", pref.key());
        self.signals.emit(pref.key());
        true
    }

    pub fn subscribe<T: PreferenceValue>(
        &self,
        pref: &Preference<T>,
        observer: impl Fn() + 'static,
    ) -> SubscriptionId {
        self.signals.subscribe(pref.key(), observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.signals.unsubscribe(id)
    }

    pub fn backend(&self) -> Ref<'_, B> {
        self.backend.borrow()
    }

    pub fn into_backend(self) -> B {
        self.backend.into_inner()
    }

    pub(crate) fn signals(&self) -> &Signals {
        &self.signals
    }

    pub(crate) fn remove_key(&self, key: PreferenceKey) -> bool {
        let mut backend = self.backend.borrow_mut();
        if !backend.contains(key) {
            return false;
        }
        if let Err(e) = backend.remove(key) {
            warn!("Failed to remove {}: {}", key, e);
        }
        true
    }
}
