use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::domain::audit::AuditFields;
use crate::domain::library_site::{LibrarySiteUpdate, NewLibrarySite};
use crate::domain::types::{Description, OpeningHours, SiteName, UserId, optional_text};
use crate::forms::FormError;

fn default_active() -> bool {
    true
}

/// Add or edit form for a library site.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LibrarySiteForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LibrarySiteFormPayload {
    pub name: SiteName,
    pub description: Option<Description>,
    pub opening_hours: Option<OpeningHours>,
    pub is_active: bool,
}

impl LibrarySiteFormPayload {
    pub fn into_new_site(self, actor: UserId) -> NewLibrarySite {
        let now = Utc::now().naive_utc();
        NewLibrarySite {
            name: self.name,
            description: self.description,
            opening_hours: self.opening_hours,
            is_active: self.is_active,
            audit: AuditFields::stamp_new(actor, now),
        }
    }

    pub fn into_update(self, actor: UserId) -> LibrarySiteUpdate {
        let now = Utc::now().naive_utc();
        LibrarySiteUpdate {
            name: self.name,
            description: self.description,
            opening_hours: self.opening_hours,
            is_active: self.is_active,
            revision: AuditFields::revision(actor, now),
        }
    }
}

impl TryFrom<LibrarySiteForm> for LibrarySiteFormPayload {
    type Error = FormError;

    fn try_from(value: LibrarySiteForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: SiteName::new(value.name)?,
            description: optional_text(value.description, Description::new)?,
            opening_hours: optional_text(value.opening_hours, OpeningHours::new)?,
            is_active: value.is_active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_is_active_unless_submitted_otherwise() {
        let form: LibrarySiteForm = serde_json::from_str(r#"{"name": "Main building"}"#).unwrap();
        let payload: LibrarySiteFormPayload = form.try_into().unwrap();
        assert!(payload.is_active);
        assert!(payload.opening_hours.is_none());
    }
}
