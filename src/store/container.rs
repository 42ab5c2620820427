//! Thread-safe single-cell store.

use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

use crate::mvi::{apply, Event, EventDescriptor, Reducer};

use super::subscription::{SubscriberList, Subscription};

/// Single state cell with synchronous subscriber notification.
///
/// Cloning the store yields another handle to the same cell. The store is
/// handed explicitly to whoever needs it; there is no global instance.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

struct StoreInner<R: Reducer> {
    state: Mutex<Arc<R::State>>,
    subscribers: Arc<Mutex<SubscriberList>>,
    /// Serializes apply + notify across threads. Reentrant so a subscriber
    /// may submit from inside its callback.
    gate: ReentrantMutex<()>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Non-owning handle to a [`Store`].
///
/// Subscribers that read state capture this instead of a `Store`, so the
/// store's subscriber list never keeps the store itself alive.
pub struct WeakStore<R: Reducer> {
    inner: Weak<StoreInner<R>>,
}

impl<R: Reducer> Clone for WeakStore<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<R: Reducer> WeakStore<R> {
    pub fn upgrade(&self) -> Option<Store<R>> {
        self.inner.upgrade().map(|inner| Store { inner })
    }

    /// Current snapshot, or `None` once the store is gone.
    pub fn get_state(&self) -> Option<Arc<R::State>> {
        self.upgrade().map(|store| store.get_state())
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Store<R>
where
    R::Event: serde::de::DeserializeOwned,
{
    /// Submit an untyped event.
    ///
    /// A descriptor that does not decode into a known event is inert: the
    /// state keeps its identity, and subscribers are still notified.
    pub fn submit_descriptor(&self, descriptor: &EventDescriptor) {
        let event = match descriptor.decode::<R::Event>() {
            Ok(event) => Some(event),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring unrecognized event");
                None
            }
        };
        self.commit(event);
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding `initial`.
    pub fn new(initial: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: Mutex::new(Arc::new(initial)),
                subscribers: Arc::new(Mutex::new(SubscriberList::default())),
                gate: ReentrantMutex::new(()),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakStore<R> {
        WeakStore {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Current snapshot.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.inner.state.lock())
    }

    /// Apply `event` and notify every subscriber before returning.
    pub fn submit(&self, event: R::Event) {
        self.commit(Some(event));
    }

    /// Register a callback invoked after every transition, in
    /// registration order.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.subscribers.lock().push(Arc::new(callback));
        Subscription::new(id, Arc::downgrade(&self.inner.subscribers))
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.lock().len()
    }

    fn commit(&self, event: Option<R::Event>) {
        let _gate = self.inner.gate.lock();

        let kind = event.as_ref().map(|event| event.kind());
        let changed = {
            let mut state = self.inner.state.lock();
            let next = apply::<R>(&*state, event);
            let changed = !Arc::ptr_eq(&*state, &next);
            *state = next;
            changed
        };
        tracing::debug!(kind = kind.unwrap_or("UNRECOGNIZED"), changed, "event applied");

        // Callbacks run without the state lock held so they can read state.
        let callbacks = self.inner.subscribers.lock().snapshot();
        for callback in callbacks {
            callback();
        }
    }
}
