use serde::{Deserialize, Serialize};

use planroute_core::Entity;
use planroute_workcenters::{Workcenter, WorkcenterId};

/// One possible work-center assignment for an operation line, with its own
/// capacity, timing, and crew parameters. Exactly one candidate per line is
/// flagged as the default (checked at save).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkcenterCandidate {
    pub workcenter_id: WorkcenterId,
    pub capacity_per_cycle: f64,
    pub time_efficiency: f64,
    /// Time in hours for doing one cycle.
    pub time_cycle: f64,
    /// Time in hours for the setup.
    pub time_start: f64,
    /// Time in hours for the cleaning.
    pub time_stop: f64,
    /// Number of operators.
    pub op_number: u32,
    /// Operator average cost in smallest currency unit (e.g., cents).
    pub op_avg_cost: u64,
    pub is_default: bool,
}

impl WorkcenterCandidate {
    /// New candidate for `workcenter`, parameters copied from its record.
    pub fn for_workcenter(workcenter: &Workcenter) -> Self {
        let mut candidate = Self {
            workcenter_id: workcenter.id,
            capacity_per_cycle: 0.0,
            time_efficiency: 0.0,
            time_cycle: 0.0,
            time_start: 0.0,
            time_stop: 0.0,
            op_number: 0,
            op_avg_cost: 0,
            is_default: false,
        };
        candidate.assign_workcenter(workcenter);
        candidate
    }

    /// User picked a work center for this candidate: copy its parameters
    /// over. Pure field copy, no computation; the default flag is untouched.
    pub fn assign_workcenter(&mut self, workcenter: &Workcenter) {
        self.workcenter_id = workcenter.id;
        self.capacity_per_cycle = workcenter.capacity_per_cycle;
        self.time_efficiency = workcenter.time_efficiency;
        self.time_cycle = workcenter.time_cycle;
        self.time_start = workcenter.time_start;
        self.time_stop = workcenter.time_stop;
        self.op_number = workcenter.op_number;
        self.op_avg_cost = workcenter.op_avg_cost;
    }
}

impl Entity for WorkcenterCandidate {
    type Id = WorkcenterId;

    fn id(&self) -> &Self::Id {
        &self.workcenter_id
    }
}
