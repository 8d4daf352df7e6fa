use serde::{Deserialize, Serialize};

use planroute_core::AggregateId;

use crate::workcenter::{Workcenter, WorkcenterId};

/// Operation template identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OperationTemplateId(pub AggregateId);

impl OperationTemplateId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for OperationTemplateId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One work center listed on an operation template, with the capacity and
/// timing parameters captured from the work-center record at listing time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateWorkcenter {
    pub workcenter_id: WorkcenterId,
    pub capacity_per_cycle: f64,
    pub time_efficiency: f64,
    pub time_cycle: f64,
    pub time_start: f64,
    pub time_stop: f64,
}

impl TemplateWorkcenter {
    /// Capture a work center's parameters for listing on a template.
    pub fn from_workcenter(workcenter: &Workcenter) -> Self {
        Self {
            workcenter_id: workcenter.id,
            capacity_per_cycle: workcenter.capacity_per_cycle,
            time_efficiency: workcenter.time_efficiency,
            time_cycle: workcenter.time_cycle,
            time_start: workcenter.time_start,
            time_stop: workcenter.time_stop,
        }
    }
}

/// Reusable definition of a manufacturing step, independent of any specific
/// routing. Assigning one to a routing line copies its name/description and
/// materializes one candidate per listed work center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationTemplate {
    pub id: OperationTemplateId,
    pub name: String,
    pub description: String,
    /// Number of operators this operation needs, regardless of work center.
    pub op_number: u32,
    /// Work centers able to perform this operation, in preference order.
    pub workcenters: Vec<TemplateWorkcenter>,
}

impl OperationTemplate {
    pub fn new(
        id: OperationTemplateId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            op_number: 0,
            workcenters: Vec::new(),
        }
    }

    /// List a work center on this template, capturing its current parameters.
    pub fn list_workcenter(&mut self, workcenter: &Workcenter) {
        self.workcenters.push(TemplateWorkcenter::from_workcenter(workcenter));
    }
}
