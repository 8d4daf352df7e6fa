//! Validate-then-commit routing record store.
//!
//! In-memory stand-in for the host application's persistence: `get` hands
//! back a cloned working copy, edits happen on the copy, and `save`
//! validates the record's structural invariants before committing it whole.
//! A rejected save leaves the previously committed record untouched, which
//! gives the same rollback semantics a framework transaction would.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;

use planroute_core::{AggregateRoot, DomainError, ExpectedVersion};
use planroute_routing::{Routing, RoutingId};

use crate::change_bus::{ChangeBus, ChangeKind, RoutingChange};

/// Save/remove failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The record violates a structural invariant; nothing was committed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Optimistic concurrency failure (stale working copy).
    #[error("concurrency conflict: {0}")]
    Concurrency(String),

    /// The record's tenant does not match the committed record's tenant.
    #[error("tenant isolation violation: {0}")]
    TenantIsolation(String),

    /// No committed record under that identifier.
    #[error("not found")]
    NotFound,
}

impl From<DomainError> for StoreError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Conflict(msg) => StoreError::Concurrency(msg),
            DomainError::NotFound => StoreError::NotFound,
            other => StoreError::Validation(other.to_string()),
        }
    }
}

/// In-memory routing record store with change notifications.
#[derive(Debug, Default)]
pub struct RoutingStore {
    records: HashMap<RoutingId, Routing>,
    bus: ChangeBus,
}

impl RoutingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to committed changes (see [`ChangeBus`]).
    pub fn changes(&self) -> std::sync::mpsc::Receiver<RoutingChange> {
        self.bus.subscribe()
    }

    /// Working copy of a committed record.
    pub fn get(&self, id: RoutingId) -> Option<Routing> {
        self.records.get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and commit a routing, returning the new committed version.
    ///
    /// Runs [`Routing::validate`] first — a violation rejects the save with
    /// nothing committed. Then checks tenant consistency against the
    /// committed record and the caller's `expected` version (a record not
    /// yet committed counts as version 0), bumps the version, commits the
    /// whole record, and publishes a `Saved` notification.
    pub fn save(
        &mut self,
        mut routing: Routing,
        expected: ExpectedVersion,
    ) -> Result<u64, StoreError> {
        if let Err(err) = routing.validate() {
            tracing::warn!(routing_id = %routing.id_typed(), %err, "routing save rejected");
            return Err(err.into());
        }

        let committed_version = match self.records.get(&routing.id_typed()) {
            Some(committed) => {
                if committed.tenant_id() != routing.tenant_id() {
                    return Err(StoreError::TenantIsolation(format!(
                        "routing {} belongs to tenant {}",
                        committed.id_typed(),
                        committed.tenant_id()
                    )));
                }
                committed.version()
            }
            None => 0,
        };
        expected.check(committed_version)?;

        let next_version = committed_version + 1;
        routing.set_version(next_version);

        let change = RoutingChange {
            routing_id: routing.id_typed(),
            tenant_id: routing.tenant_id(),
            kind: ChangeKind::Saved,
            version: next_version,
            occurred_at: Utc::now(),
        };

        tracing::debug!(
            routing_id = %routing.id_typed(),
            version = next_version,
            lines = routing.lines.len(),
            "routing saved"
        );

        self.records.insert(routing.id_typed(), routing);
        self.bus.notify(&change);
        Ok(next_version)
    }

    /// Remove a committed record, publishing a `Removed` notification.
    pub fn remove(&mut self, id: RoutingId) -> Result<Routing, StoreError> {
        let removed = self.records.remove(&id).ok_or(StoreError::NotFound)?;

        self.bus.notify(&RoutingChange {
            routing_id: id,
            tenant_id: removed.tenant_id(),
            kind: ChangeKind::Removed,
            version: removed.version(),
            occurred_at: Utc::now(),
        });
        Ok(removed)
    }
}
