use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::audit::{AuditFields, Revision};
use crate::domain::isbn::Isbn13;
use crate::domain::media_number::{LegacyMediaNumber, MediaNumber};
use crate::domain::types::{
    Authors, Comments, Description, LibrarySiteId, MediaCategoryId, MediaFileRef, MediaId,
    MediaPrice, MediaTitle, MediaTypeId, Publisher,
};

/// A catalogued media item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: MediaId,
    pub title: MediaTitle,
    pub authors: Option<Authors>,
    pub site_id: LibrarySiteId,
    pub category_id: MediaCategoryId,
    pub media_type_id: MediaTypeId,
    pub legacy_media_number: Option<LegacyMediaNumber>,
    /// Assigned once on insert and never rewritten.
    pub media_number: MediaNumber,
    pub isbn13: Option<Isbn13>,
    pub acquisition_date: Option<NaiveDate>,
    pub price: Option<MediaPrice>,
    pub left_library_date: Option<NaiveDate>,
    pub comments: Option<Comments>,
    pub publisher: Option<Publisher>,
    pub publishing_date: Option<NaiveDate>,
    pub short_description: Option<Description>,
    pub media_file: Option<MediaFileRef>,
    pub audit: AuditFields,
}

impl Display for Media {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.media_number, self.title)
    }
}

/// Data required to insert a new [`Media`].
///
/// There is no media number here: the repository assigns it inside the insert
/// transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewMedia {
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
    pub audit: AuditFields,
}

/// Editable fields of an existing [`Media`].
///
/// Category and legacy number are fixed after creation because the media
/// number is derived from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MediaUpdate {
    pub title: MediaTitle,
    pub authors: Option<Authors>,
    pub site_id: LibrarySiteId,
    pub media_type_id: MediaTypeId,
    pub isbn13: Option<Isbn13>,
    pub acquisition_date: Option<NaiveDate>,
    pub price: Option<MediaPrice>,
    pub left_library_date: Option<NaiveDate>,
    pub comments: Option<Comments>,
    pub publisher: Option<Publisher>,
    pub publishing_date: Option<NaiveDate>,
    pub short_description: Option<Description>,
    pub media_file: Option<MediaFileRef>,
    pub revision: Revision,
}
