use serde::{Deserialize, Serialize};

use planroute_core::AggregateId;

/// Work center identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkcenterId(pub AggregateId);

impl WorkcenterId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for WorkcenterId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Work center master record: a resource/location where operations are
/// physically performed, with its capacity, timing, and crew parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workcenter {
    pub id: WorkcenterId,
    pub name: String,
    /// Units produced per cycle at this work center.
    pub capacity_per_cycle: f64,
    /// Efficiency factor (1.0 = nominal).
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
}

impl Workcenter {
    /// New work center with nominal efficiency and everything else zeroed.
    pub fn new(id: WorkcenterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            capacity_per_cycle: 0.0,
            time_efficiency: 1.0,
            time_cycle: 0.0,
            time_start: 0.0,
            time_stop: 0.0,
            op_number: 0,
            op_avg_cost: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_workcenter_starts_at_nominal_efficiency() {
        let wc = Workcenter::new(WorkcenterId::new(AggregateId::new()), "Lathe");
        assert_eq!(wc.name, "Lathe");
        assert_eq!(wc.time_efficiency, 1.0);
        assert_eq!(wc.capacity_per_cycle, 0.0);
        assert_eq!(wc.op_number, 0);
    }
}
