//! Per-key change notification.
//!
//! Observers carry no payload; they re-query the store for the new value.
//! Delivery is synchronous and in registration order.

use crate::preference::PreferenceKey;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

type Observer = Rc<dyn Fn()>;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct Signals {
    next_id: Cell<u64>,
    observers: RefCell<Vec<(SubscriptionId, PreferenceKey, Observer)>>,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, key: PreferenceKey, observer: impl Fn() + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, key, Rc::new(observer)));
        id
    }

    /// Returns false if the subscription was already gone
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers.borrow_mut();
        let before = observers.len();
        observers.retain(|(other, _, _)| *other != id);
        observers.len() != before
    }

    pub fn observer_count(&self, key: PreferenceKey) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|(_, other, _)| *other == key)
            .count()
    }

    /// Notify every observer of `key`.
    ///
    /// The observer list is snapshotted first, so observers may subscribe,
    /// unsubscribe or write other preferences while being notified.
    pub fn emit(&self, key: PreferenceKey) {
        let targets: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .filter(|(_, other, _)| *other == key)
            .map(|(_, _, observer)| Rc::clone(observer))
            .collect();

        debug!("{} changed, notifying {} observer(s)", key, targets.len());
        for observer in targets {
            observer();
        }
    }
}
