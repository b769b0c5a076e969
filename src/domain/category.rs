use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::audit::{AuditFields, Revision};
use crate::domain::types::{
    CategoryCode, CategoryName, ColourCode, ColourName, Description, MediaCategoryId,
};

/// Category a media item is filed under; its code prefixes media numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaCategory {
    pub id: MediaCategoryId,
    pub code: CategoryCode,
    pub name: CategoryName,
    pub colour: ColourName,
    pub colour_code: ColourCode,
    pub description: Option<Description>,
    pub audit: AuditFields,
}

impl Display for MediaCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// Data required to insert a new [`MediaCategory`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMediaCategory {
    pub code: CategoryCode,
    pub name: CategoryName,
    pub colour: ColourName,
    pub colour_code: ColourCode,
    pub description: Option<Description>,
    pub audit: AuditFields,
}

/// Editable fields of an existing [`MediaCategory`].
///
/// The code may only change while no media reference the category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaCategoryUpdate {
    pub code: CategoryCode,
    pub name: CategoryName,
    pub colour: ColourName,
    pub colour_code: ColourCode,
    pub description: Option<Description>,
    pub revision: Revision,
}
