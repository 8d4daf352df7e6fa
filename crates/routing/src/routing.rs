use serde::{Deserialize, Serialize};

use planroute_core::{AggregateId, AggregateRoot, DomainResult, TenantId};

use crate::line::OperationLine;
use crate::validate::exactly_one_flagged;

/// Routing identifier (tenant-scoped via the owning record's `tenant_id`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutingId(pub AggregateId);

impl RoutingId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for RoutingId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Ordered definition of the manufacturing operations for producing a good.
///
/// Identity and version are store-managed; `name` and `lines` are edited
/// directly on a working copy and validated when the copy is saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Routing {
    id: RoutingId,
    tenant_id: TenantId,
    pub name: String,
    pub lines: Vec<OperationLine>,
    version: u64,
}

impl Routing {
    pub fn new(id: RoutingId, tenant_id: TenantId, name: impl Into<String>) -> Self {
        Self {
            id,
            tenant_id,
            name: name.into(),
            lines: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> RoutingId {
        self.id
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    /// Append a new operation line, numbered after the existing ones.
    pub fn add_line(&mut self, name: impl Into<String>) -> &mut OperationLine {
        let next_line_no = (self.lines.len() as u32) + 1;
        self.lines.push(OperationLine::new(next_line_no, name));
        let last = self.lines.len() - 1;
        &mut self.lines[last]
    }

    /// The line flagged "produce here", if any.
    pub fn produce_line(&self) -> Option<&OperationLine> {
        self.lines.iter().find(|l| l.do_production)
    }

    /// Save-time validation of the routing's structural invariants.
    ///
    /// Exactly one line must be flagged "produce here" (empty routing
    /// exempt), and each line must have exactly one default work-center
    /// candidate (empty candidate list exempt). Any violation rejects the
    /// whole save; nothing is committed.
    pub fn validate(&self) -> DomainResult<()> {
        exactly_one_flagged(
            &self.lines,
            |l| l.do_production,
            "there must be one and only one operation marked 'produce here'",
        )?;

        for line in &self.lines {
            line.validate_default_candidate()?;
        }

        Ok(())
    }

    /// Store-managed: set the committed version after a successful save.
    pub fn set_version(&mut self, version: u64) {
        self.version = version;
    }
}

impl AggregateRoot for Routing {
    type Id = RoutingId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
