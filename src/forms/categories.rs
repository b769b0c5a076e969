use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::domain::audit::AuditFields;
use crate::domain::category::{MediaCategoryUpdate, NewMediaCategory};
use crate::domain::types::{
    CategoryCode, CategoryName, ColourCode, ColourName, Description, UserId, optional_text,
};
use crate::forms::FormError;

/// Add or edit form for a media category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MediaCategoryForm {
    #[validate(length(min = 1, max = 3))]
    pub code: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub colour: String,
    #[validate(length(min = 4, max = 7))]
    pub colour_code: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaCategoryFormPayload {
    pub code: CategoryCode,
    pub name: CategoryName,
    pub colour: ColourName,
    pub colour_code: ColourCode,
    pub description: Option<Description>,
}

impl MediaCategoryFormPayload {
    pub fn into_new_category(self, actor: UserId) -> NewMediaCategory {
        let now = Utc::now().naive_utc();
        NewMediaCategory {
            code: self.code,
            name: self.name,
            colour: self.colour,
            colour_code: self.colour_code,
            description: self.description,
            audit: AuditFields::stamp_new(actor, now),
        }
    }

    pub fn into_update(self, actor: UserId) -> MediaCategoryUpdate {
        let now = Utc::now().naive_utc();
        MediaCategoryUpdate {
            code: self.code,
            name: self.name,
            colour: self.colour,
            colour_code: self.colour_code,
            description: self.description,
            revision: AuditFields::revision(actor, now),
        }
    }
}

impl TryFrom<MediaCategoryForm> for MediaCategoryFormPayload {
    type Error = FormError;

    fn try_from(value: MediaCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            code: CategoryCode::new(value.code)?,
            name: CategoryName::new(value.name)?,
            colour: ColourName::new(value.colour)?,
            colour_code: ColourCode::new(value.colour_code)?,
            description: optional_text(value.description, Description::new)?,
        })
    }
}
