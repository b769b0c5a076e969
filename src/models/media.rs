use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::isbn::Isbn13;
use crate::domain::media::{Media as DomainMedia, NewMedia as DomainNewMedia};
use crate::domain::media_number::{LegacyMediaNumber, MediaNumber};
use crate::domain::types::{
    Authors, Comments, Description, MediaFileRef, MediaPrice, MediaTitle, Publisher,
    TypeConstraintError,
};
use crate::models::{audit_from_row, optional_text};

/// Diesel model representing the `media` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::media)]
pub struct Media {
    pub id: i32,
    pub title: String,
    pub authors: Option<String>,
    pub site_id: i32,
    pub category_id: i32,
    pub media_type_id: i32,
    pub legacy_media_number: Option<String>,
    pub media_number: String,
    pub isbn13: Option<String>,
    pub acquisition_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub left_library_date: Option<NaiveDate>,
    pub comments: Option<String>,
    pub publisher: Option<String>,
    pub publishing_date: Option<NaiveDate>,
    pub short_description: Option<String>,
    pub media_file: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

/// Insertable form of [`Media`]; `media_number` is filled in by the repository.
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::media)]
pub struct NewMedia<'a> {
    pub title: &'a str,
    pub authors: Option<&'a str>,
    pub site_id: i32,
    pub category_id: i32,
    pub media_type_id: i32,
    pub legacy_media_number: Option<&'a str>,
    pub media_number: &'a str,
    pub isbn13: Option<&'a str>,
    pub acquisition_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub left_library_date: Option<NaiveDate>,
    pub comments: Option<&'a str>,
    pub publisher: Option<&'a str>,
    pub publishing_date: Option<NaiveDate>,
    pub short_description: Option<&'a str>,
    pub media_file: Option<&'a str>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl<'a> NewMedia<'a> {
    pub fn from_domain(media: &'a DomainNewMedia, media_number: &'a MediaNumber) -> Self {
        Self {
            title: media.title.as_str(),
            authors: media.authors.as_deref(),
            site_id: media.site_id.get(),
            category_id: media.category_id.get(),
            media_type_id: media.media_type_id.get(),
            legacy_media_number: media.legacy_media_number.as_ref().map(|n| n.as_str()),
            media_number: media_number.as_str(),
            isbn13: media.isbn13.as_ref().map(|i| i.as_str()),
            acquisition_date: media.acquisition_date,
            price: media.price.map(f64::from),
            left_library_date: media.left_library_date,
            comments: media.comments.as_deref(),
            publisher: media.publisher.as_deref(),
            publishing_date: media.publishing_date,
            short_description: media.short_description.as_deref(),
            media_file: media.media_file.as_deref(),
            created_at: media.audit.created_at,
            updated_at: media.audit.updated_at,
            created_by: media.audit.created_by.map(i32::from),
            updated_by: media.audit.updated_by.map(i32::from),
        }
    }
}

impl TryFrom<Media> for DomainMedia {
    type Error = TypeConstraintError;

    fn try_from(media: Media) -> Result<Self, Self::Error> {
        Ok(Self {
            id: media.id.try_into()?,
            title: MediaTitle::new(media.title)?,
            authors: optional_text(media.authors, Authors::new)?,
            site_id: media.site_id.try_into()?,
            category_id: media.category_id.try_into()?,
            media_type_id: media.media_type_id.try_into()?,
            legacy_media_number: optional_text(
                media.legacy_media_number,
                LegacyMediaNumber::new,
            )?,
            media_number: MediaNumber::new(media.media_number)?,
            isbn13: optional_text(media.isbn13, Isbn13::new)?,
            acquisition_date: media.acquisition_date,
            price: media.price.map(MediaPrice::new).transpose()?,
            left_library_date: media.left_library_date,
            comments: optional_text(media.comments, Comments::new)?,
            publisher: optional_text(media.publisher, Publisher::new)?,
            publishing_date: media.publishing_date,
            short_description: optional_text(media.short_description, Description::new)?,
            media_file: optional_text(media.media_file, MediaFileRef::new)?,
            audit: audit_from_row(
                media.created_at,
                media.updated_at,
                media.created_by,
                media.updated_by,
            )?,
        })
    }
}
