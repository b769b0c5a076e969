use serde::{Deserialize, Serialize};

use crate::domain::audit::{AuditFields, Revision};
use crate::domain::types::{MediaTypeId, MediaTypeName};

/// Kind of media, e.g. book, game or music CD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    pub id: MediaTypeId,
    pub name: MediaTypeName,
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMediaType {
    pub name: MediaTypeName,
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaTypeUpdate {
    pub name: MediaTypeName,
    pub revision: Revision,
}
