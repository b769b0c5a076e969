//! Diesel row models and their conversions to and from domain types.

use chrono::NaiveDateTime;

use crate::domain::audit::AuditFields;
use crate::domain::types::{TypeConstraintError, UserId};

pub(crate) use crate::domain::types::optional_text;

pub mod borrower;
pub mod category;
pub mod config;
pub mod library_site;
pub mod media;
pub mod media_type;

/// Rebuilds audit fields from the four stored columns.
fn audit_from_row(
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
    created_by: Option<i32>,
    updated_by: Option<i32>,
) -> Result<AuditFields, TypeConstraintError> {
    Ok(AuditFields {
        created_at,
        updated_at,
        created_by: created_by.map(UserId::new).transpose()?,
        updated_by: updated_by.map(UserId::new).transpose()?,
    })
}
