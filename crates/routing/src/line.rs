use serde::{Deserialize, Serialize};

use planroute_core::{DomainError, DomainResult, Entity};
use planroute_workcenters::{OperationTemplate, OperationTemplateId, WorkcenterId};

use crate::candidate::WorkcenterCandidate;
use crate::validate::exactly_one_flagged;

/// One step in a routing.
///
/// Fields are edited directly (form-style); the application layer calls
/// [`OperationLine::refresh_default_workcenter`] after changing the
/// candidate list and [`OperationLine::validate_default_candidate`] runs as
/// part of the routing's save validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationLine {
    pub line_no: u32,
    pub name: String,
    pub note: String,
    /// Operation template this line was filled from, if any.
    pub operation: Option<OperationTemplateId>,
    /// If set, production and movement to stock of the final product happen
    /// in this operation. Only one line per routing may carry this flag.
    pub do_production: bool,
    /// Summary: work center of the default candidate.
    pub workcenter_id: Option<WorkcenterId>,
    /// Summary: capacity per cycle of the default candidate.
    pub capacity_per_cycle: f64,
    /// Summary: cycle time of the default candidate.
    pub time_cycle: f64,
    /// Possible work centers for this operation.
    pub candidates: Vec<WorkcenterCandidate>,
}

impl OperationLine {
    pub fn new(line_no: u32, name: impl Into<String>) -> Self {
        Self {
            line_no,
            name: name.into(),
            note: String::new(),
            operation: None,
            do_production: false,
            workcenter_id: None,
            capacity_per_cycle: 0.0,
            time_cycle: 0.0,
            candidates: Vec::new(),
        }
    }

    /// User assigned an operation template to this line.
    ///
    /// Copies the template's name and description, rebuilds the candidate
    /// list from the template's work-center rows (operator count comes from
    /// the template itself), and flags the first candidate as default —
    /// first in template order wins, this tie-break is fixed. A template
    /// with no listed work centers leaves the candidate list empty and
    /// flags nothing.
    pub fn assign_operation(&mut self, template: &OperationTemplate) {
        self.operation = Some(template.id);
        self.name = template.name.clone();
        self.note = template.description.clone();

        self.candidates = template
            .workcenters
            .iter()
            .enumerate()
            .map(|(i, listed)| WorkcenterCandidate {
                workcenter_id: listed.workcenter_id,
                capacity_per_cycle: listed.capacity_per_cycle,
                time_efficiency: listed.time_efficiency,
                time_cycle: listed.time_cycle,
                time_start: listed.time_start,
                time_stop: listed.time_stop,
                op_number: template.op_number,
                op_avg_cost: 0,
                is_default: i == 0,
            })
            .collect();

        self.refresh_default_workcenter();
    }

    /// The candidate currently flagged as default, if any.
    pub fn default_candidate(&self) -> Option<&WorkcenterCandidate> {
        self.candidates.iter().find(|c| c.is_default)
    }

    /// Copy the default candidate's work center, capacity, and cycle time
    /// onto the line's summary fields.
    ///
    /// Call after any change to the candidate list. Stops at the first
    /// flagged candidate (only one should exist once the record is valid);
    /// with no flagged candidate the summary is left untouched.
    pub fn refresh_default_workcenter(&mut self) {
        if let Some(candidate) = self.candidates.iter().find(|c| c.is_default) {
            self.workcenter_id = Some(candidate.workcenter_id);
            self.capacity_per_cycle = candidate.capacity_per_cycle;
            self.time_cycle = candidate.time_cycle;
        }
    }

    /// Flag the candidate for `workcenter_id` as the default, clearing the
    /// flag everywhere else, and refresh the summary fields.
    pub fn set_default_candidate(&mut self, workcenter_id: WorkcenterId) -> DomainResult<()> {
        if !self.candidates.iter().any(|c| c.workcenter_id == workcenter_id) {
            return Err(DomainError::not_found());
        }

        for candidate in &mut self.candidates {
            candidate.is_default = candidate.workcenter_id == workcenter_id;
        }
        self.refresh_default_workcenter();
        Ok(())
    }

    /// Exactly one candidate must be flagged default (empty list exempt).
    pub fn validate_default_candidate(&self) -> DomainResult<()> {
        exactly_one_flagged(
            &self.candidates,
            |c| c.is_default,
            "there must be one and only one work center line set as default",
        )
    }
}

impl Entity for OperationLine {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.line_no
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planroute_core::AggregateId;
    use planroute_workcenters::Workcenter;

    fn test_workcenter(name: &str, capacity: f64, cycle: f64) -> Workcenter {
        let mut wc = Workcenter::new(WorkcenterId::new(AggregateId::new()), name);
        wc.capacity_per_cycle = capacity;
        wc.time_efficiency = 0.9;
        wc.time_cycle = cycle;
        wc.time_start = 0.5;
        wc.time_stop = 0.25;
        wc.op_number = 2;
        wc
    }

    fn drill_template(workcenters: &[&Workcenter]) -> OperationTemplate {
        let mut template = OperationTemplate::new(
            OperationTemplateId::new(AggregateId::new()),
            "Drill",
            "Drill holes",
        );
        template.op_number = 2;
        for wc in workcenters {
            template.list_workcenter(wc);
        }
        template
    }

    #[test]
    fn assign_operation_copies_name_and_materializes_candidates() {
        let a = test_workcenter("A", 4.0, 1.5);
        let b = test_workcenter("B", 6.0, 2.5);
        let template = drill_template(&[&a, &b]);

        let mut line = OperationLine::new(1, "");
        line.assign_operation(&template);

        assert_eq!(line.name, "Drill");
        assert_eq!(line.note, "Drill holes");
        assert_eq!(line.operation, Some(template.id));
        assert_eq!(line.candidates.len(), 2);
        assert!(line.candidates[0].is_default);
        assert!(!line.candidates[1].is_default);
        assert_eq!(line.candidates[0].workcenter_id, a.id);
        assert_eq!(line.candidates[1].workcenter_id, b.id);
        assert_eq!(line.candidates[0].op_number, 2);
        assert_eq!(line.candidates[1].time_cycle, 2.5);
    }

    #[test]
    fn assign_operation_refreshes_summary_from_first_candidate() {
        let a = test_workcenter("A", 4.0, 1.5);
        let b = test_workcenter("B", 6.0, 2.5);
        let template = drill_template(&[&a, &b]);

        let mut line = OperationLine::new(1, "");
        line.assign_operation(&template);

        assert_eq!(line.workcenter_id, Some(a.id));
        assert_eq!(line.capacity_per_cycle, 4.0);
        assert_eq!(line.time_cycle, 1.5);
    }

    #[test]
    fn assign_operation_with_empty_template_leaves_no_candidates() {
        let template = drill_template(&[]);

        let mut line = OperationLine::new(1, "Manual step");
        line.assign_operation(&template);

        assert_eq!(line.name, "Drill");
        assert!(line.candidates.is_empty());
        assert_eq!(line.workcenter_id, None);
        assert!(line.validate_default_candidate().is_ok());
    }

    #[test]
    fn assign_operation_replaces_previous_candidates() {
        let a = test_workcenter("A", 4.0, 1.5);
        let b = test_workcenter("B", 6.0, 2.5);
        let first = drill_template(&[&a, &b]);
        let second = drill_template(&[&b]);

        let mut line = OperationLine::new(1, "");
        line.assign_operation(&first);
        line.assign_operation(&second);

        assert_eq!(line.candidates.len(), 1);
        assert_eq!(line.candidates[0].workcenter_id, b.id);
        assert!(line.candidates[0].is_default);
        assert_eq!(line.workcenter_id, Some(b.id));
    }

    #[test]
    fn set_default_candidate_reflags_and_propagates_to_summary() {
        let a = test_workcenter("A", 4.0, 1.5);
        let b = test_workcenter("B", 6.0, 2.5);
        let template = drill_template(&[&a, &b]);

        let mut line = OperationLine::new(1, "");
        line.assign_operation(&template);
        line.set_default_candidate(b.id).unwrap();

        assert!(!line.candidates[0].is_default);
        assert!(line.candidates[1].is_default);
        assert_eq!(line.workcenter_id, Some(b.id));
        assert_eq!(line.capacity_per_cycle, 6.0);
        assert_eq!(line.time_cycle, 2.5);
    }

    #[test]
    fn set_default_candidate_rejects_unknown_workcenter() {
        let a = test_workcenter("A", 4.0, 1.5);
        let template = drill_template(&[&a]);

        let mut line = OperationLine::new(1, "");
        line.assign_operation(&template);

        let stranger = WorkcenterId::new(AggregateId::new());
        assert_eq!(line.set_default_candidate(stranger), Err(DomainError::NotFound));
        // Flags untouched on failure.
        assert!(line.candidates[0].is_default);
    }

    #[test]
    fn refresh_with_no_default_leaves_summary_untouched() {
        let a = test_workcenter("A", 4.0, 1.5);
        let template = drill_template(&[&a]);

        let mut line = OperationLine::new(1, "");
        line.assign_operation(&template);
        line.candidates[0].is_default = false;
        line.refresh_default_workcenter();

        // Stale but untouched: the save-time check reports the missing default.
        assert_eq!(line.workcenter_id, Some(a.id));
        assert!(line.validate_default_candidate().is_err());
    }

    #[test]
    fn validate_default_candidate_rejects_two_defaults() {
        let a = test_workcenter("A", 4.0, 1.5);
        let b = test_workcenter("B", 6.0, 2.5);
        let template = drill_template(&[&a, &b]);

        let mut line = OperationLine::new(1, "");
        line.assign_operation(&template);
        line.candidates[1].is_default = true;

        let err = line.validate_default_candidate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
