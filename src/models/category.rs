use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::category::{
    MediaCategory as DomainMediaCategory, NewMediaCategory as DomainNewMediaCategory,
};
use crate::domain::types::{
    CategoryCode, CategoryName, ColourCode, ColourName, Description, TypeConstraintError,
};
use crate::models::{audit_from_row, optional_text};

/// Diesel model representing the `media_categories` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::media_categories)]
pub struct MediaCategory {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub colour: String,
    pub colour_code: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

/// Insertable form of [`MediaCategory`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::media_categories)]
pub struct NewMediaCategory {
    pub code: String,
    pub name: String,
    pub colour: String,
    pub colour_code: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl TryFrom<MediaCategory> for DomainMediaCategory {
    type Error = TypeConstraintError;

    fn try_from(category: MediaCategory) -> Result<Self, Self::Error> {
        Ok(Self {
            id: category.id.try_into()?,
            code: CategoryCode::new(category.code)?,
            name: CategoryName::new(category.name)?,
            colour: ColourName::new(category.colour)?,
            colour_code: ColourCode::new(category.colour_code)?,
            description: optional_text(category.description, Description::new)?,
            audit: audit_from_row(
                category.created_at,
                category.updated_at,
                category.created_by,
                category.updated_by,
            )?,
        })
    }
}

impl From<DomainNewMediaCategory> for NewMediaCategory {
    fn from(category: DomainNewMediaCategory) -> Self {
        Self {
            code: category.code.into_inner(),
            name: category.name.into_inner(),
            colour: category.colour.into_inner(),
            colour_code: category.colour_code.into_inner(),
            description: category.description.map(String::from),
            created_at: category.audit.created_at,
            updated_at: category.audit.updated_at,
            created_by: category.audit.created_by.map(i32::from),
            updated_by: category.audit.updated_by.map(i32::from),
        }
    }
}
