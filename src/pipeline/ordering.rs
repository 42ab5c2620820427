//! Ticketing for intents that race each other.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// How terminal events of overlapping intents on one channel are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Only the most recently dispatched intent on a channel may finish.
    #[default]
    LatestWins,
    /// Every intent finishes; completion order is whatever the scheduler
    /// produces, so a slow stale response can overwrite a newer one.
    Unordered,
}

/// Issued to an intent at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub channel: &'static str,
    pub seq: u64,
}

pub(crate) struct TicketBook {
    policy: OrderingPolicy,
    next: AtomicU64,
    latest: Mutex<HashMap<&'static str, u64>>,
}

impl TicketBook {
    pub(crate) fn new(policy: OrderingPolicy) -> Self {
        Self {
            policy,
            next: AtomicU64::new(1),
            latest: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn policy(&self) -> OrderingPolicy {
        self.policy
    }

    pub(crate) fn issue(&self, channel: Option<&'static str>) -> Option<Ticket> {
        let channel = channel?;
        // Numbering and recording happen under one lock so the recorded
        // latest is always the highest issued sequence.
        let mut latest = self.latest.lock();
        let seq = self.next.fetch_add(1, Ordering::SeqCst);
        latest.insert(channel, seq);
        Some(Ticket { channel, seq })
    }

    pub(crate) fn is_current(&self, ticket: &Ticket) -> bool {
        match self.policy {
            OrderingPolicy::Unordered => true,
            OrderingPolicy::LatestWins => {
                self.latest.lock().get(ticket.channel) == Some(&ticket.seq)
            }
        }
    }
}
