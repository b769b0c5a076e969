use serde::Serialize;

use crate::domain::category::MediaCategory;

/// Entry of the category picker on the media form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryOptionDto {
    pub id: i32,
    pub code: String,
    /// `"{code} - {name}"`.
    pub label: String,
    pub colour_code: String,
}

impl From<MediaCategory> for CategoryOptionDto {
    fn from(value: MediaCategory) -> Self {
        Self {
            id: value.id.get(),
            label: value.to_string(),
            code: value.code.into_inner(),
            colour_code: value.colour_code.into_inner(),
        }
    }
}
