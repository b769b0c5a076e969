use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::audit::AuditFields;
use crate::domain::isbn::Isbn13;
use crate::domain::media::{MediaUpdate, NewMedia};
use crate::domain::media_number::LegacyMediaNumber;
use crate::domain::types::{
    Authors, Comments, Description, LibrarySiteId, MediaCategoryId, MediaFileRef, MediaPrice,
    MediaTitle, MediaTypeId, Publisher, UserId, optional_text,
};
use crate::forms::FormError;

/// Add or edit form for a media item.
///
/// `legacy_media_number` and `category_id` only take effect on creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MediaForm {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub authors: Option<String>,
    #[validate(range(min = 1))]
    pub site_id: i32,
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(range(min = 1))]
    pub media_type_id: i32,
    #[serde(default)]
    pub legacy_media_number: Option<String>,
    #[serde(default)]
    pub isbn13: Option<String>,
    #[serde(default)]
    pub acquisition_date: Option<NaiveDate>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub left_library_date: Option<NaiveDate>,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publishing_date: Option<NaiveDate>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub media_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MediaFormPayload {
    pub title: MediaTitle,
    pub authors: Option<Authors>,
    pub site_id: LibrarySiteId,
    pub category_id: MediaCategoryId,
    pub media_type_id: MediaTypeId,
    pub legacy_media_number: Option<LegacyMediaNumber>,
    pub isbn13: Option<Isbn13>,
    pub acquisition_date: Option<NaiveDate>,
    pub price: Option<MediaPrice>,
    pub left_library_date: Option<NaiveDate>,
    pub comments: Option<Comments>,
    pub publisher: Option<Publisher>,
    pub publishing_date: Option<NaiveDate>,
    pub short_description: Option<Description>,
    pub media_file: Option<MediaFileRef>,
}

impl MediaFormPayload {
    pub fn into_new_media(self, actor: UserId) -> NewMedia {
        let now = Utc::now().naive_utc();
        NewMedia {
            title: self.title,
            authors: self.authors,
            site_id: self.site_id,
            category_id: self.category_id,
            media_type_id: self.media_type_id,
            legacy_media_number: self.legacy_media_number,
            isbn13: self.isbn13,
            acquisition_date: self.acquisition_date,
            price: self.price,
            left_library_date: self.left_library_date,
            comments: self.comments,
            publisher: self.publisher,
            publishing_date: self.publishing_date,
            short_description: self.short_description,
            media_file: self.media_file,
            audit: AuditFields::stamp_new(actor, now),
        }
    }

    /// Editable part of the payload; category and legacy number are dropped.
    pub fn into_update(self, actor: UserId) -> MediaUpdate {
        let now = Utc::now().naive_utc();
        MediaUpdate {
            title: self.title,
            authors: self.authors,
            site_id: self.site_id,
            media_type_id: self.media_type_id,
            isbn13: self.isbn13,
            acquisition_date: self.acquisition_date,
            price: self.price,
            left_library_date: self.left_library_date,
            comments: self.comments,
            publisher: self.publisher,
            publishing_date: self.publishing_date,
            short_description: self.short_description,
            media_file: self.media_file,
            revision: AuditFields::revision(actor, now),
        }
    }
}

impl TryFrom<MediaForm> for MediaFormPayload {
    type Error = FormError;

    fn try_from(value: MediaForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            title: MediaTitle::new(value.title)?,
            authors: optional_text(value.authors, Authors::new)?,
            site_id: LibrarySiteId::new(value.site_id)?,
            category_id: MediaCategoryId::new(value.category_id)?,
            media_type_id: MediaTypeId::new(value.media_type_id)?,
            legacy_media_number: optional_text(
                value.legacy_media_number,
                LegacyMediaNumber::new,
            )?,
            isbn13: optional_text(value.isbn13, Isbn13::new)?,
            acquisition_date: value.acquisition_date,
            price: value.price.map(MediaPrice::new).transpose()?,
            left_library_date: value.left_library_date,
            comments: optional_text(value.comments, Comments::new)?,
            publisher: optional_text(value.publisher, Publisher::new)?,
            publishing_date: value.publishing_date,
            short_description: optional_text(value.short_description, Description::new)?,
            media_file: optional_text(value.media_file, MediaFileRef::new)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> MediaForm {
        serde_json::from_value(serde_json::json!({
            "title": "Momo",
            "authors": "Michael Ende",
            "site_id": 1,
            "category_id": 1,
            "media_type_id": 1,
            "isbn13": "9781861972712",
            "acquisition_date": "2024-09-02",
            "price": 12.5
        }))
        .unwrap()
    }

    #[test]
    fn parses_full_form() {
        let payload: MediaFormPayload = form().try_into().unwrap();
        assert_eq!(payload.isbn13.unwrap().as_str(), "9781861972712");
        assert_eq!(
            payload.acquisition_date,
            NaiveDate::from_ymd_opt(2024, 9, 2)
        );
        assert!(payload.legacy_media_number.is_none());
    }

    #[test]
    fn invalid_isbn_is_a_form_error() {
        let mut form = form();
        form.isbn13 = Some("9781861972718".to_string());
        let err = MediaFormPayload::try_from(form).unwrap_err();
        match err {
            FormError::TypeConstraint(message) => {
                assert_eq!(message, "The ISBN-13 number is not valid.")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_isbn_is_absent() {
        let mut form = form();
        form.isbn13 = Some(" ".to_string());
        let payload: MediaFormPayload = form.try_into().unwrap();
        assert!(payload.isbn13.is_none());
    }

    #[test]
    fn legacy_number_out_of_range_is_rejected() {
        let mut form = form();
        form.legacy_media_number = Some("0000".to_string());
        assert!(MediaFormPayload::try_from(form).is_err());
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut form = form();
        form.price = Some(-1.0);
        assert!(matches!(
            MediaFormPayload::try_from(form),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn price_is_kept_to_cents() {
        let mut form = form();
        form.price = Some(4.999);
        let payload = MediaFormPayload::try_from(form).unwrap();
        assert_eq!(payload.price.map(MediaPrice::get), Some(5.0));
    }
}
