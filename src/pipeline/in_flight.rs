//! Tracking of spawned intent continuations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Clone, Default)]
pub(crate) struct InFlight {
    count: Arc<AtomicUsize>,
    notify: Arc<Notify>,
}

/// Held by a running continuation; releases its slot on drop.
pub(crate) struct InFlightGuard {
    count: Arc<AtomicUsize>,
    notify: Arc<Notify>,
}

impl InFlight {
    pub(crate) fn enter(&self) -> InFlightGuard {
        self.count.fetch_add(1, Ordering::SeqCst);
        InFlightGuard {
            count: Arc::clone(&self.count),
            notify: Arc::clone(&self.notify),
        }
    }

    pub(crate) fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub(crate) async fn settled(&self) {
        loop {
            // Enable the Notified future BEFORE checking the count, or a
            // release between the check and the await would be missed.
            let notified = self.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.count() == 0 {
                return;
            }
            notified.await;
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.notify.notify_waiters();
        }
    }
}
