//! Infrastructure layer: record lifecycle for routing records.
//!
//! The surrounding application owns real persistence, transactions, and
//! multi-user isolation; this crate supplies the in-memory equivalents the
//! domain needs to be exercised end to end — a validate-then-commit record
//! store, change notifications, and the master-data catalogs routings read
//! from.

pub mod change_bus;
pub mod master_data;
pub mod store;

pub use change_bus::{ChangeBus, ChangeKind, RoutingChange};
pub use master_data::MasterData;
pub use store::{RoutingStore, StoreError};
