use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::domain::audit::AuditFields;
use crate::domain::media_type::{MediaTypeUpdate, NewMediaType};
use crate::domain::types::{MediaTypeName, UserId};
use crate::forms::FormError;

/// Add or edit form for a media type.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MediaTypeForm {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaTypeFormPayload {
    pub name: MediaTypeName,
}

impl MediaTypeFormPayload {
    pub fn into_new_media_type(self, actor: UserId) -> NewMediaType {
        let now = Utc::now().naive_utc();
        NewMediaType {
            name: self.name,
            audit: AuditFields::stamp_new(actor, now),
        }
    }

    pub fn into_update(self, actor: UserId) -> MediaTypeUpdate {
        let now = Utc::now().naive_utc();
        MediaTypeUpdate {
            name: self.name,
            revision: AuditFields::revision(actor, now),
        }
    }
}

impl TryFrom<MediaTypeForm> for MediaTypeFormPayload {
    type Error = FormError;

    fn try_from(value: MediaTypeForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            name: MediaTypeName::new(value.name)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_name_is_rejected() {
        let form = MediaTypeForm {
            name: "   ".to_string(),
        };
        let payload: Result<MediaTypeFormPayload, _> = form.try_into();
        assert!(matches!(payload, Err(FormError::TypeConstraint(_))));
    }
}
