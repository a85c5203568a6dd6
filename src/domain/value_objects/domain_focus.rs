//! Domain focus value object - the single domain a purpose statement targets

use serde::{Deserialize, Serialize};

/// Closed set of domains a stated purpose can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DomainFocus {
    CustomerService,
    WorkflowOrchestration,
    Infrastructure,
    Security,
    #[default]
    General,
}

impl DomainFocus {
    /// Wire name, as used in reports and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainFocus::CustomerService => "customer_service",
            DomainFocus::WorkflowOrchestration => "workflow_orchestration",
            DomainFocus::Infrastructure => "infrastructure",
            DomainFocus::Security => "security",
            DomainFocus::General => "general",
        }
    }

    /// Customer-facing vocabulary (flights, bookings) is only relevant here.
    pub fn is_customer_service(&self) -> bool {
        matches!(self, DomainFocus::CustomerService)
    }
}

impl std::fmt::Display for DomainFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
