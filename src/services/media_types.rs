use crate::domain::media_type::MediaType;
use crate::domain::types::{MediaTypeId, UserId};
use crate::forms::media_types::MediaTypeFormPayload;
use crate::repository::{MediaTypeListQuery, MediaTypeReader, MediaTypeWriter};

use super::{ServiceError, ServiceResult, repository_failure};

pub fn list_media_types<R>(
    query: MediaTypeListQuery,
    repo: &R,
) -> ServiceResult<(usize, Vec<MediaType>)>
where
    R: MediaTypeReader,
{
    repo.list_media_types(query)
        .map_err(|e| repository_failure("list media types", e))
}

pub fn get_media_type<R>(id: MediaTypeId, repo: &R) -> ServiceResult<MediaType>
where
    R: MediaTypeReader,
{
    match repo.get_media_type_by_id(id) {
        Ok(Some(media_type)) => Ok(media_type),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get media type", e)),
    }
}

pub fn create_media_type<R>(
    payload: MediaTypeFormPayload,
    actor: UserId,
    repo: &R,
) -> ServiceResult<MediaType>
where
    R: MediaTypeWriter,
{
    repo.create_media_type(&payload.into_new_media_type(actor))
        .map_err(|e| repository_failure("create media type", e))
}

pub fn update_media_type<R>(
    id: MediaTypeId,
    payload: MediaTypeFormPayload,
    actor: UserId,
    repo: &R,
) -> ServiceResult<()>
where
    R: MediaTypeWriter,
{
    match repo.update_media_type(id, &payload.into_update(actor)) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("update media type", e)),
    }
}

pub fn delete_media_type<R>(id: MediaTypeId, repo: &R) -> ServiceResult<()>
where
    R: MediaTypeWriter,
{
    match repo.delete_media_type(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("delete media type", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::MediaTypeName;
    use crate::repository::test::{TestRepository, sample_media_type, sample_user};

    #[test]
    fn renames_media_type() {
        let repo = TestRepository::new().with_media_types(vec![sample_media_type(1)]);
        let id = MediaTypeId::new(1).unwrap();
        let payload = MediaTypeFormPayload {
            name: MediaTypeName::new("Board game").unwrap(),
        };

        update_media_type(id, payload, sample_user(), &repo).unwrap();

        assert_eq!(get_media_type(id, &repo).unwrap().name.as_str(), "Board game");
    }

    #[test]
    fn deleting_unknown_type_is_not_found() {
        let repo = TestRepository::new();
        let result = delete_media_type(MediaTypeId::new(3).unwrap(), &repo);
        assert_eq!(result, Err(ServiceError::NotFound));
    }
}
