//! Listener registries and observable values.
//!
//! ## Usage
//!
//! Widgets publish state changes through [`Observable`] and hosts publish
//! events through [`Listeners`]. Every `subscribe` returns a
//! [`Subscription`] guard that releases the listener when dropped, so a
//! widget that is torn down can never be called back into.
//!
//! Listeners run synchronously, in subscription order, and never while an
//! internal lock is held: a listener may read the value it is being told
//! about, or subscribe further listeners, without deadlocking.
//!
//! ```
//! use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
//! use vitrine_ui::Observable;
//!
//! let width = Observable::new(0.0_f64);
//! let calls = Arc::new(AtomicUsize::new(0));
//! let seen = calls.clone();
//! let subscription = width.subscribe(move |_| {
//!     seen.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! width.set(972.0);
//! drop(subscription);
//! width.set(1944.0);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::{
    fmt,
    sync::{Arc, Weak},
};

use parking_lot::{Mutex, RwLock};
use smallvec::SmallVec;

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Registry<T> {
    next_id: u64,
    entries: SmallVec<[(u64, Callback<T>); 4]>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: SmallVec::new(),
        }
    }
}

/// An ordered set of callbacks notified with a `&T`.
///
/// `Listeners` is a cheap handle: clones share the same registry.
pub struct Listeners<T> {
    registry: Arc<Mutex<Registry<T>>>,
}

impl<T> Clone for Listeners<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            registry: Arc::new(Mutex::new(Registry::default())),
        }
    }
}

impl<T> fmt::Debug for Listeners<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("len", &self.len())
            .finish()
    }
}

impl<T: 'static> Listeners<T> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` after every existing listener.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let id = {
            let mut registry = self.registry.lock();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push((id, Arc::new(listener)));
            id
        };

        let registry: Weak<Mutex<Registry<T>>> = Arc::downgrade(&self.registry);
        Subscription::new(move || {
            if let Some(registry) = registry.upgrade() {
                registry.lock().entries.retain(|(entry_id, _)| *entry_id != id);
            }
        })
    }

    /// Calls every listener with `value`, in subscription order.
    ///
    /// The listener list is snapshotted first; listeners added or removed
    /// during notification take effect from the next call.
    pub fn notify(&self, value: &T) {
        let snapshot: SmallVec<[Callback<T>; 4]> = self
            .registry
            .lock()
            .entries
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in snapshot {
            callback(value);
        }
    }
}

impl<T> Listeners<T> {
    /// Returns the number of live listeners.
    pub fn len(&self) -> usize {
        self.registry.lock().entries.len()
    }

    /// Returns `true` when nobody is listening.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Guard for a registered listener.
///
/// Dropping the guard, or calling [`Subscription::unsubscribe`], removes the
/// listener. Releasing after the source itself is gone is a no-op.
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(release: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard that was never attached to a source.
    ///
    /// Returned where a subscription was refused; it is inactive from the
    /// start and dropping it does nothing.
    pub fn detached() -> Self {
        Self { release: None }
    }

    /// Removes the listener now.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    /// Returns `true` until the listener has been released.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

/// A shared value that notifies listeners whenever a new value is committed.
pub struct Observable<T> {
    value: Arc<RwLock<T>>,
    listeners: Listeners<T>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            listeners: self.listeners.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.value.read())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<T: Default + Clone + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Observable<T> {
    /// Creates an observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            listeners: Listeners::new(),
        }
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Executes a closure with a shared reference to the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Commits `value` and notifies every listener.
    pub fn set(&self, value: T) {
        *self.value.write() = value.clone();
        self.listeners.notify(&value);
    }

    /// Commits `value` only when it differs from the current one.
    ///
    /// Returns `true` when listeners were notified.
    pub fn set_if_changed(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        {
            let mut current = self.value.write();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.listeners.notify(&value);
        true
    }

    /// Registers a change listener.
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    /// Returns the number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn listeners_run_in_subscription_order() {
        let listeners = Listeners::<u32>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let first = order.clone();
        let _a = listeners.subscribe(move |value| first.lock().push(("a", *value)));
        let second = order.clone();
        let _b = listeners.subscribe(move |value| second.lock().push(("b", *value)));

        listeners.notify(&7);
        assert_eq!(*order.lock(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn dropping_subscription_releases_listener() {
        let listeners = Listeners::<u32>::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let subscription = listeners.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(listeners.len(), 1);

        drop(subscription);
        assert!(listeners.is_empty());

        listeners.notify(&1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn detached_subscription_is_inert() {
        let subscription = Subscription::detached();
        assert!(!subscription.is_active());
        subscription.unsubscribe();
    }

    #[test]
    fn unsubscribe_after_source_dropped_is_noop() {
        let listeners = Listeners::<u32>::new();
        let subscription = listeners.subscribe(|_| {});
        drop(listeners);
        assert!(subscription.is_active());
        subscription.unsubscribe();
    }

    #[test]
    fn listener_can_read_observable_reentrantly() {
        let width = Observable::new(0.0_f64);
        let observed = Arc::new(Mutex::new(None));

        let source = width.clone();
        let sink = observed.clone();
        let _subscription = width.subscribe(move |_| {
            *sink.lock() = Some(source.get());
        });

        width.set(972.0);
        assert_eq!(*observed.lock(), Some(972.0));
    }

    #[test]
    fn set_if_changed_skips_identical_values() {
        let value = Observable::new(3_u32);
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        let _subscription = value.subscribe(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        assert!(!value.set_if_changed(3));
        assert!(value.set_if_changed(4));
        value.set(4);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(value.get(), 4);
    }
}
