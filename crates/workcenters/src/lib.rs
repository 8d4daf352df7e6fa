//! Work-center and operation-template master data.
//!
//! These records are owned by the surrounding application (catalog forms,
//! imports); routing records only ever *read* them, copying parameters onto
//! their own lines when the user picks one.

pub mod operation;
pub mod workcenter;

pub use operation::{OperationTemplate, OperationTemplateId, TemplateWorkcenter};
pub use workcenter::{Workcenter, WorkcenterId};
