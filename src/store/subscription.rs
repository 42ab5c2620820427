use std::sync::Weak;

use parking_lot::Mutex;

pub(crate) type Callback = std::sync::Arc<dyn Fn() + Send + Sync>;

/// Registered subscribers in registration order.
#[derive(Default)]
pub(crate) struct SubscriberList {
    next_id: u64,
    entries: Vec<(u64, Callback)>,
}

impl SubscriberList {
    pub(crate) fn push(&mut self, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn snapshot(&self) -> Vec<Callback> {
        self.entries.iter().map(|(_, cb)| cb.clone()).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Capability to deregister a subscriber.
///
/// Dropping the handle keeps the subscriber registered.
#[must_use = "dropping a Subscription leaves the callback registered"]
pub struct Subscription {
    id: u64,
    list: Weak<Mutex<SubscriberList>>,
}

impl Subscription {
    pub(crate) fn new(id: u64, list: Weak<Mutex<SubscriberList>>) -> Self {
        Self { id, list }
    }

    /// Remove the callback. Returns false if the store is gone or the
    /// callback was already removed.
    pub fn unsubscribe(self) -> bool {
        match self.list.upgrade() {
            Some(list) => list.lock().remove(self.id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn ids_are_unique_after_removal() {
        let mut list = SubscriberList::default();
        let a = list.push(Arc::new(|| {}));
        assert!(list.remove(a));
        let b = list.push(Arc::new(|| {}));
        assert_ne!(a, b);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_false() {
        let mut list = SubscriberList::default();
        assert!(!list.remove(42));
    }
}
