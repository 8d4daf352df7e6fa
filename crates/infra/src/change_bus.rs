//! Change notifications for routing records.
//!
//! Stand-in for the host application's change-notification mechanism: the
//! store publishes one notification per committed save or removal, and any
//! number of subscribers (forms, reports, other modules) receive a copy.
//! Best-effort fan-out, no persistence; consumers that need history must
//! re-read the store.

use std::sync::{Mutex, mpsc};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use planroute_core::TenantId;
use planroute_routing::RoutingId;

/// What happened to the record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Saved,
    Removed,
}

/// One committed change to a routing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingChange {
    pub routing_id: RoutingId,
    pub tenant_id: TenantId,
    pub kind: ChangeKind,
    /// Committed version after the change (last committed version for removals).
    pub version: u64,
    pub occurred_at: DateTime<Utc>,
}

/// In-memory fan-out of [`RoutingChange`] notifications.
#[derive(Debug, Default)]
pub struct ChangeBus {
    subscribers: Mutex<Vec<mpsc::Sender<RoutingChange>>>,
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to all future changes.
    pub fn subscribe(&self) -> mpsc::Receiver<RoutingChange> {
        let (tx, rx) = mpsc::channel();
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.push(tx);
        }
        rx
    }

    /// Fan a change out to every live subscriber, pruning dead ones.
    pub fn notify(&self, change: &RoutingChange) {
        if let Ok(mut subs) = self.subscribers.lock() {
            subs.retain(|tx| tx.send(change.clone()).is_ok());
        }
    }
}
