//! Shared holder for the current account snapshot with change notification.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    PoisonError, RwLock,
};

use bufy_domain::AccountSnapshot;
use tracing::debug;

/// Handle returned by [`AccountStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(Option<&AccountSnapshot>) + Send + Sync>;

/// Owns the account snapshot and tells subscribers whenever it changes.
///
/// Listeners run synchronously on the writer's thread, in subscription order.
/// They must not subscribe or unsubscribe from inside the callback.
#[derive(Default)]
pub struct AccountStore {
    current: RwLock<Option<AccountSnapshot>>,
    listeners: RwLock<Vec<(SubscriptionId, Listener)>>,
    next_id: AtomicU64,
}

impl AccountStore {
    pub fn new(initial: Option<AccountSnapshot>) -> Self {
        Self {
            current: RwLock::new(initial),
            ..Self::default()
        }
    }

    pub fn get(&self) -> Option<AccountSnapshot> {
        *self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn is_loaded(&self) -> bool {
        self.get().is_some()
    }

    /// Replaces the snapshot and notifies subscribers.
    pub fn set(&self, snapshot: AccountSnapshot) {
        self.replace(Some(snapshot));
    }

    /// Drops the snapshot and notifies subscribers with `None`.
    pub fn clear(&self) {
        self.replace(None);
    }

    /// Edits the current snapshot in place and publishes the result.
    ///
    /// The edit runs under the write lock, so concurrent updates never drop
    /// each other's changes. Returns `false` without notifying anyone when no
    /// snapshot is loaded.
    pub fn update<F>(&self, edit: F) -> bool
    where
        F: FnOnce(&mut AccountSnapshot),
    {
        let edited = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            let Some(snapshot) = current.as_mut() else {
                return false;
            };
            edit(snapshot);
            *snapshot
        };
        self.notify(Some(&edited));
        true
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Option<&AccountSnapshot>) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns `false` when the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn replace(&self, snapshot: Option<AccountSnapshot>) {
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            *current = snapshot;
        }
        self.notify(snapshot.as_ref());
    }

    fn notify(&self, snapshot: Option<&AccountSnapshot>) {
        let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner);
        debug!(
            "account snapshot changed; notifying {} subscriber(s)",
            listeners.len()
        );
        for (_, listener) in listeners.iter() {
            listener(snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn notifies_subscribers_in_order() {
        let store = AccountStore::default();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&seen);
        store.subscribe(move |snapshot| {
            first
                .lock()
                .unwrap()
                .push(("first", snapshot.map(|s| s.income)));
        });
        let second = Arc::clone(&seen);
        store.subscribe(move |snapshot| {
            second
                .lock()
                .unwrap()
                .push(("second", snapshot.map(|s| s.income)));
        });

        store.set(AccountSnapshot {
            income: 500.0,
            ..AccountSnapshot::default()
        });
        store.clear();

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                ("first", Some(500.0)),
                ("second", Some(500.0)),
                ("first", None),
                ("second", None),
            ]
        );
    }

    #[test]
    fn unsubscribed_listener_is_not_called() {
        let store = AccountStore::default();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let id = store.subscribe(move |_| *counter.lock().unwrap() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(AccountSnapshot::default());

        assert_eq!(*calls.lock().unwrap(), 0);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn update_without_snapshot_is_a_no_op() {
        let store = AccountStore::default();
        assert!(!store.update(|snapshot| snapshot.income = 10.0));
        assert!(store.get().is_none());

        store.set(AccountSnapshot::default());
        assert!(store.update(|snapshot| snapshot.income = 10.0));
        assert_eq!(store.get().map(|s| s.income), Some(10.0));
    }

    #[test]
    fn concurrent_updates_are_not_lost() {
        let store = Arc::new(AccountStore::new(Some(AccountSnapshot::default())));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        store.update(|snapshot| snapshot.groceries += 1.0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get().map(|s| s.groceries), Some(1000.0));
    }
}
