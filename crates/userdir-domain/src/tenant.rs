//! Tenant scoping.

use serde::{Deserialize, Serialize};

use crate::id::OrgId;

/// The organization a tenant-scoped directory call acts within.
///
/// Every organization-scoped store query takes one of these explicitly; there
/// is no ambient "current org".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantScope {
    pub org_id: OrgId,
}

impl TenantScope {
    pub fn new(org_id: impl Into<OrgId>) -> Self {
        Self {
            org_id: org_id.into(),
        }
    }

    pub fn org_id(&self) -> &OrgId {
        &self.org_id
    }
}
