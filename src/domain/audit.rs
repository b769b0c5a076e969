use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Who created and last changed a record, and when.
///
/// Writers pass the acting user explicitly; nothing is read from request
/// state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditFields {
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<UserId>,
    pub updated_by: Option<UserId>,
}

impl AuditFields {
    /// Stamp for a record saved for the first time.
    pub fn stamp_new(actor: UserId, now: NaiveDateTime) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            created_by: Some(actor),
            updated_by: Some(actor),
        }
    }

    /// Stamp applied on every later save.
    pub fn revision(actor: UserId, now: NaiveDateTime) -> Revision {
        Revision {
            updated_at: now,
            updated_by: actor,
        }
    }

    /// Applies `revision` leaving the creation stamp untouched.
    pub fn apply(&mut self, revision: Revision) {
        self.updated_at = revision.updated_at;
        self.updated_by = Some(revision.updated_by);
    }
}

/// Update half of [`AuditFields`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Revision {
    pub updated_at: NaiveDateTime,
    pub updated_by: UserId,
}
