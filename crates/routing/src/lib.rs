//! Routing domain module.
//!
//! A routing is a named sequence of operation lines; each line carries the
//! work centers able to perform it (candidates) and flags exactly one of
//! them as the default. Exactly one line per routing is flagged "produce
//! here". Rules are plain methods the application layer calls after field
//! edits; invariants are checked by [`Routing::validate`] before a save is
//! committed.

pub mod candidate;
pub mod line;
pub mod routing;
pub mod validate;

pub use candidate::WorkcenterCandidate;
pub use line::OperationLine;
pub use routing::{Routing, RoutingId};
pub use validate::exactly_one_flagged;
