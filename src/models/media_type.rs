use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::media_type::{
    MediaType as DomainMediaType, NewMediaType as DomainNewMediaType,
};
use crate::domain::types::{MediaTypeName, TypeConstraintError};
use crate::models::audit_from_row;

/// Diesel model representing the `media_types` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::media_types)]
pub struct MediaType {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::media_types)]
pub struct NewMediaType<'a> {
    pub name: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl TryFrom<MediaType> for DomainMediaType {
    type Error = TypeConstraintError;

    fn try_from(media_type: MediaType) -> Result<Self, Self::Error> {
        Ok(Self {
            id: media_type.id.try_into()?,
            name: MediaTypeName::new(media_type.name)?,
            audit: audit_from_row(
                media_type.created_at,
                media_type.updated_at,
                media_type.created_by,
                media_type.updated_by,
            )?,
        })
    }
}

impl<'a> From<&'a DomainNewMediaType> for NewMediaType<'a> {
    fn from(media_type: &'a DomainNewMediaType) -> Self {
        Self {
            name: media_type.name.as_str(),
            created_at: media_type.audit.created_at,
            updated_at: media_type.audit.updated_at,
            created_by: media_type.audit.created_by.map(i32::from),
            updated_by: media_type.audit.updated_by.map(i32::from),
        }
    }
}
