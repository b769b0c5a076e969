use crate::domain::library_site::LibrarySite;
use crate::domain::types::{LibrarySiteId, UserId};
use crate::forms::sites::LibrarySiteFormPayload;
use crate::repository::{LibrarySiteListQuery, LibrarySiteReader, LibrarySiteWriter};

use super::{ServiceError, ServiceResult, repository_failure};

pub fn list_sites<R>(
    query: LibrarySiteListQuery,
    repo: &R,
) -> ServiceResult<(usize, Vec<LibrarySite>)>
where
    R: LibrarySiteReader,
{
    repo.list_sites(query)
        .map_err(|e| repository_failure("list library sites", e))
}

pub fn get_site<R>(id: LibrarySiteId, repo: &R) -> ServiceResult<LibrarySite>
where
    R: LibrarySiteReader,
{
    match repo.get_site_by_id(id) {
        Ok(Some(site)) => Ok(site),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get library site", e)),
    }
}

pub fn create_site<R>(
    payload: LibrarySiteFormPayload,
    actor: UserId,
    repo: &R,
) -> ServiceResult<LibrarySite>
where
    R: LibrarySiteWriter,
{
    repo.create_site(&payload.into_new_site(actor))
        .map_err(|e| repository_failure("create library site", e))
}

pub fn update_site<R>(
    id: LibrarySiteId,
    payload: LibrarySiteFormPayload,
    actor: UserId,
    repo: &R,
) -> ServiceResult<()>
where
    R: LibrarySiteWriter,
{
    match repo.update_site(id, &payload.into_update(actor)) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("update library site", e)),
    }
}

pub fn delete_site<R>(id: LibrarySiteId, repo: &R) -> ServiceResult<()>
where
    R: LibrarySiteWriter,
{
    match repo.delete_site(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("delete library site", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::SiteName;
    use crate::repository::test::{TestRepository, sample_site, sample_user};

    #[test]
    fn lists_only_active_sites_when_asked() {
        let mut closed = sample_site(2);
        closed.is_active = false;
        let repo = TestRepository::new().with_sites(vec![sample_site(1), closed]);

        let (total, sites) =
            list_sites(LibrarySiteListQuery::default().active(true), &repo).unwrap();

        assert_eq!(total, 1);
        assert_eq!(sites[0].id.get(), 1);
    }

    #[test]
    fn duplicate_site_name_is_a_conflict() {
        let repo = TestRepository::new().with_sites(vec![sample_site(1)]);
        let payload = LibrarySiteFormPayload {
            name: SiteName::new("Site 1").unwrap(),
            description: None,
            opening_hours: None,
            is_active: true,
        };

        let result = create_site(payload, sample_user(), &repo);

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }
}
