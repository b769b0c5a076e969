use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::library_site::{
    LibrarySite as DomainLibrarySite, NewLibrarySite as DomainNewLibrarySite,
};
use crate::domain::types::{Description, OpeningHours, SiteName, TypeConstraintError};
use crate::models::{audit_from_row, optional_text};

/// Diesel model representing the `library_sites` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::library_sites)]
pub struct LibrarySite {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub opening_hours: Option<String>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::library_sites)]
pub struct NewLibrarySite<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub opening_hours: Option<&'a str>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl TryFrom<LibrarySite> for DomainLibrarySite {
    type Error = TypeConstraintError;

    fn try_from(site: LibrarySite) -> Result<Self, Self::Error> {
        Ok(Self {
            id: site.id.try_into()?,
            name: SiteName::new(site.name)?,
            description: optional_text(site.description, Description::new)?,
            opening_hours: optional_text(site.opening_hours, OpeningHours::new)?,
            is_active: site.is_active,
            audit: audit_from_row(
                site.created_at,
                site.updated_at,
                site.created_by,
                site.updated_by,
            )?,
        })
    }
}

impl<'a> From<&'a DomainNewLibrarySite> for NewLibrarySite<'a> {
    fn from(site: &'a DomainNewLibrarySite) -> Self {
        Self {
            name: site.name.as_str(),
            description: site.description.as_deref(),
            opening_hours: site.opening_hours.as_deref(),
            is_active: site.is_active,
            created_at: site.audit.created_at,
            updated_at: site.audit.updated_at,
            created_by: site.audit.created_by.map(i32::from),
            updated_by: site.audit.updated_by.map(i32::from),
        }
    }
}
