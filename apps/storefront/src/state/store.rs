//! # Observable Store
//!
//! A value behind a lock plus a list of change listeners. `CartState`,
//! `SearchFilterState` and the catalog resources are all built on it.
//!
//! ## Notification Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  store.update(|s| ...)                                                  │
//! │       │                                                                 │
//! │       ├── lock state ──► run closure ──► clone snapshot ──► unlock      │
//! │       │                                                                 │
//! │       └── for each listener (in subscription order):                    │
//! │               listener(&snapshot)        ◄── lock NOT held              │
//! │                                                                         │
//! │  Listeners may read, update or subscribe to the same store.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call to [`Store::update`] notifies, whether or not the closure
//! changed anything. [`Store::try_update`] notifies only when it applies.
//! Reads never notify.
//!
//! ## Ordering
//! Each mutation takes a version number while the state lock is held. Once
//! a newer version has started notifying, the remaining listeners of an
//! older one are skipped, so a listener that updates the store never leaves
//! the others looking at the pre-update snapshot.
//!
//! The session has one logical writer. Concurrent writers from several
//! threads are memory safe, but listeners may then observe their snapshots
//! in either order.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Change listener. Receives the state as it was right after the mutation.
pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Shared state with synchronous change notification.
pub struct Store<S> {
    state: Mutex<S>,
    listeners: Mutex<Vec<(Subscription, Listener<S>)>>,
    next_id: AtomicU64,
    /// Last version handed out, bumped under the state lock.
    version: AtomicU64,
    /// Newest version whose notification has started.
    delivered: AtomicU64,
}

impl<S: Clone> Store<S> {
    pub fn new(initial: S) -> Self {
        Store {
            state: Mutex::new(initial),
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            version: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
        }
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> S {
        lock(&self.state).clone()
    }

    /// Executes a function with read access to the state.
    ///
    /// ```rust,ignore
    /// let total = cart_store.read(|cart| cart.total_items());
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&S) -> R,
    {
        let state = lock(&self.state);
        f(&state)
    }

    /// Executes a function with write access to the state, then notifies
    /// every listener.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut S) -> R,
    {
        let (result, version, snapshot) = {
            let mut state = lock(&self.state);
            let result = f(&mut state);
            (result, self.next_version(), state.clone())
        };

        self.notify(version, &snapshot);
        result
    }

    /// Like [`Store::update`], but listeners are only notified when the
    /// closure returns `Some`. The closure must leave the state untouched
    /// when it returns `None`.
    pub fn try_update<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&mut S) -> Option<R>,
    {
        let (result, version, snapshot) = {
            let mut state = lock(&self.state);
            let result = f(&mut state)?;
            (result, self.next_version(), state.clone())
        };

        self.notify(version, &snapshot);
        Some(result)
    }

    /// Registers a listener called after every mutation.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = Subscription(self.next_id.fetch_add(1, Ordering::Relaxed));
        lock(&self.listeners).push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut listeners = lock(&self.listeners);
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.listeners).len()
    }

    fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_superseded(&self, version: u64) -> bool {
        self.delivered.load(Ordering::SeqCst) > version
    }

    fn notify(&self, version: u64, snapshot: &S) {
        if self.delivered.fetch_max(version, Ordering::SeqCst) > version {
            return;
        }

        let listeners: Vec<Listener<S>> = lock(&self.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            if self.is_superseded(version) {
                break;
            }
            listener(snapshot);
        }
    }
}

impl<S: Clone + Default> Default for Store<S> {
    fn default() -> Self {
        Store::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*lock(&self.state))
            .field("listeners", &lock(&self.listeners).len())
            .finish()
    }
}

/// A panicking listener or closure must not brick the session, so a
/// poisoned lock is recovered rather than propagated.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
