//! Master-data catalogs routings read from.
//!
//! Work centers and operation templates are owned by the surrounding
//! application; routing edits only ever look them up to copy parameters.

use std::collections::HashMap;

use planroute_core::{DomainError, DomainResult};
use planroute_workcenters::{OperationTemplate, OperationTemplateId, Workcenter, WorkcenterId};

/// In-memory work-center and operation-template catalogs.
#[derive(Debug, Default)]
pub struct MasterData {
    workcenters: HashMap<WorkcenterId, Workcenter>,
    templates: HashMap<OperationTemplateId, OperationTemplate>,
}

impl MasterData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_workcenter(&mut self, workcenter: Workcenter) {
        self.workcenters.insert(workcenter.id, workcenter);
    }

    pub fn insert_template(&mut self, template: OperationTemplate) {
        self.templates.insert(template.id, template);
    }

    pub fn workcenter(&self, id: WorkcenterId) -> Option<&Workcenter> {
        self.workcenters.get(&id)
    }

    pub fn template(&self, id: OperationTemplateId) -> Option<&OperationTemplate> {
        self.templates.get(&id)
    }

    /// Look up a work center, failing with `NotFound` for dangling references.
    pub fn require_workcenter(&self, id: WorkcenterId) -> DomainResult<&Workcenter> {
        self.workcenters.get(&id).ok_or(DomainError::NotFound)
    }

    /// Look up a template, failing with `NotFound` for dangling references.
    pub fn require_template(&self, id: OperationTemplateId) -> DomainResult<&OperationTemplate> {
        self.templates.get(&id).ok_or(DomainError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planroute_core::AggregateId;

    #[test]
    fn lookup_round_trips_inserted_records() {
        let mut catalog = MasterData::new();
        let wc = Workcenter::new(WorkcenterId::new(AggregateId::new()), "Press");
        let wc_id = wc.id;
        catalog.insert_workcenter(wc);

        assert_eq!(catalog.workcenter(wc_id).map(|w| w.name.as_str()), Some("Press"));
        assert!(catalog.require_workcenter(wc_id).is_ok());
    }

    #[test]
    fn dangling_references_are_not_found() {
        let catalog = MasterData::new();
        let missing = WorkcenterId::new(AggregateId::new());

        assert!(catalog.workcenter(missing).is_none());
        assert_eq!(
            catalog.require_workcenter(missing).unwrap_err(),
            DomainError::NotFound
        );
        assert_eq!(
            catalog
                .require_template(OperationTemplateId::new(AggregateId::new()))
                .unwrap_err(),
            DomainError::NotFound
        );
    }
}
