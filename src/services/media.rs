use crate::domain::media::Media;
use crate::domain::types::{LibrarySiteId, MediaCategoryId, MediaId, MediaTypeId, UserId};
use crate::forms::media::MediaFormPayload;
use crate::repository::{
    LibrarySiteReader, MediaCategoryReader, MediaListQuery, MediaReader, MediaTypeReader,
    MediaWriter,
};

use super::{ServiceError, ServiceResult, repository_failure};

pub fn list_media<R>(query: MediaListQuery, repo: &R) -> ServiceResult<(usize, Vec<Media>)>
where
    R: MediaReader,
{
    repo.list_media(query)
        .map_err(|e| repository_failure("list media", e))
}

pub fn get_media<R>(id: MediaId, repo: &R) -> ServiceResult<Media>
where
    R: MediaReader,
{
    match repo.get_media_by_id(id) {
        Ok(Some(item)) => Ok(item),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get media", e)),
    }
}

/// Looks a media item up by its printed number, e.g. `T0001`.
pub fn find_media_by_number<R>(media_number: &str, repo: &R) -> ServiceResult<Media>
where
    R: MediaReader,
{
    match repo.get_media_by_number(media_number.trim()) {
        Ok(Some(item)) => Ok(item),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("find media by number", e)),
    }
}

fn ensure_site<R: LibrarySiteReader>(id: LibrarySiteId, repo: &R) -> ServiceResult<()> {
    match repo.get_site_by_id(id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::Form(format!("Unknown library site {id}"))),
        Err(e) => Err(repository_failure("get library site", e)),
    }
}

fn ensure_media_type<R: MediaTypeReader>(id: MediaTypeId, repo: &R) -> ServiceResult<()> {
    match repo.get_media_type_by_id(id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::Form(format!("Unknown media type {id}"))),
        Err(e) => Err(repository_failure("get media type", e)),
    }
}

fn ensure_category<R: MediaCategoryReader>(id: MediaCategoryId, repo: &R) -> ServiceResult<()> {
    match repo.get_category_by_id(id) {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(ServiceError::Form(format!("Unknown media category {id}"))),
        Err(e) => Err(repository_failure("get media category", e)),
    }
}

/// Catalogues a new media item.
///
/// The media number is assigned by the repository while the row is written.
/// A number that is already taken, e.g. a reused legacy number, is reported
/// as [`ServiceError::Conflict`] and nothing is saved.
pub fn create_media<R>(payload: MediaFormPayload, actor: UserId, repo: &R) -> ServiceResult<Media>
where
    R: MediaWriter + MediaCategoryReader + LibrarySiteReader + MediaTypeReader,
{
    ensure_category(payload.category_id, repo)?;
    ensure_site(payload.site_id, repo)?;
    ensure_media_type(payload.media_type_id, repo)?;

    let created = repo
        .create_media(&payload.into_new_media(actor))
        .map_err(|e| repository_failure("create media", e))?;
    log::info!("Assigned media number {}", created.media_number);
    Ok(created)
}

/// Saves the edited media item. Its category and legacy number are fixed.
pub fn update_media<R>(
    id: MediaId,
    payload: MediaFormPayload,
    actor: UserId,
    repo: &R,
) -> ServiceResult<()>
where
    R: MediaReader + MediaWriter + LibrarySiteReader + MediaTypeReader,
{
    let current = get_media(id, repo)?;

    if current.category_id != payload.category_id {
        return Err(ServiceError::Conflict(format!(
            "the category of {} cannot change",
            current.media_number
        )));
    }
    if current.legacy_media_number != payload.legacy_media_number {
        return Err(ServiceError::Conflict(format!(
            "the legacy number of {} cannot change",
            current.media_number
        )));
    }

    ensure_site(payload.site_id, repo)?;
    ensure_media_type(payload.media_type_id, repo)?;

    match repo.update_media(id, &payload.into_update(actor)) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("update media", e)),
    }
}

pub fn delete_media<R>(id: MediaId, repo: &R) -> ServiceResult<()>
where
    R: MediaWriter,
{
    match repo.delete_media(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("delete media", e)),
    }
}
