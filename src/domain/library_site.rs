use serde::{Deserialize, Serialize};

use crate::domain::audit::{AuditFields, Revision};
use crate::domain::types::{Description, LibrarySiteId, OpeningHours, SiteName};

/// Physical location where media are shelved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySite {
    pub id: LibrarySiteId,
    pub name: SiteName,
    pub description: Option<Description>,
    pub opening_hours: Option<OpeningHours>,
    pub is_active: bool,
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewLibrarySite {
    pub name: SiteName,
    pub description: Option<Description>,
    pub opening_hours: Option<OpeningHours>,
    pub is_active: bool,
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibrarySiteUpdate {
    pub name: SiteName,
    pub description: Option<Description>,
    pub opening_hours: Option<OpeningHours>,
    pub is_active: bool,
    pub revision: Revision,
}
