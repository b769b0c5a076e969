use crate::domain::category::MediaCategory;
use crate::domain::types::{MediaCategoryId, UserId};
use crate::dto::categories::CategoryOptionDto;
use crate::forms::categories::MediaCategoryFormPayload;
use crate::repository::{CategoryListQuery, MediaCategoryReader, MediaCategoryWriter};

use super::{ServiceError, ServiceResult, repository_failure};

pub fn list_categories<R>(
    query: CategoryListQuery,
    repo: &R,
) -> ServiceResult<(usize, Vec<MediaCategory>)>
where
    R: MediaCategoryReader,
{
    repo.list_categories(query)
        .map_err(|e| repository_failure("list categories", e))
}

/// Categories offered when filing a media item, ordered by code.
pub fn category_options<R>(repo: &R) -> ServiceResult<Vec<CategoryOptionDto>>
where
    R: MediaCategoryReader,
{
    let (_total, categories) = list_categories(CategoryListQuery::default(), repo)?;
    Ok(categories.into_iter().map(CategoryOptionDto::from).collect())
}

pub fn get_category<R>(id: MediaCategoryId, repo: &R) -> ServiceResult<MediaCategory>
where
    R: MediaCategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get category", e)),
    }
}

pub fn create_category<R>(
    payload: MediaCategoryFormPayload,
    actor: UserId,
    repo: &R,
) -> ServiceResult<MediaCategory>
where
    R: MediaCategoryWriter,
{
    let category = payload.into_new_category(actor);
    let created = repo
        .create_category(&category)
        .map_err(|e| repository_failure("create category", e))?;
    log::info!("Created media category {created}");
    Ok(created)
}

/// Saves the edited category. Renaming the code of a category in use is
/// rejected with [`ServiceError::Conflict`].
pub fn update_category<R>(
    id: MediaCategoryId,
    payload: MediaCategoryFormPayload,
    actor: UserId,
    repo: &R,
) -> ServiceResult<()>
where
    R: MediaCategoryReader + MediaCategoryWriter,
{
    get_category(id, repo)?;

    match repo.update_category(id, &payload.into_update(actor)) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("update category", e)),
    }
}

/// Deletes an unused category; categories referenced by media are kept.
pub fn delete_category<R>(id: MediaCategoryId, repo: &R) -> ServiceResult<()>
where
    R: MediaCategoryWriter,
{
    match repo.delete_category(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("delete category", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{CategoryCode, CategoryName, ColourCode, ColourName};
    use crate::repository::test::{TestRepository, sample_category, sample_user};

    fn payload(code: &str) -> MediaCategoryFormPayload {
        MediaCategoryFormPayload {
            code: CategoryCode::new(code).unwrap(),
            name: CategoryName::new("Textbooks").unwrap(),
            colour: ColourName::new("green").unwrap(),
            colour_code: ColourCode::new("#00ff00").unwrap(),
            description: None,
        }
    }

    #[test]
    fn options_are_labelled_with_code_and_name() {
        let repo = TestRepository::new()
            .with_categories(vec![sample_category(2, "S"), sample_category(1, "AB")]);

        let options = category_options(&repo).unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "AB - Category AB");
        assert_eq!(options[1].code, "S");
    }

    #[test]
    fn duplicate_code_is_a_conflict() {
        let repo = TestRepository::new().with_categories(vec![sample_category(1, "T")]);

        let result = create_category(payload("T"), sample_user(), &repo);

        assert!(matches!(result, Err(ServiceError::Conflict(_))));
    }

    #[test]
    fn update_of_missing_category_is_not_found() {
        let repo = TestRepository::new();
        let id = MediaCategoryId::new(9).unwrap();

        let result = update_category(id, payload("T"), sample_user(), &repo);

        assert_eq!(result, Err(ServiceError::NotFound));
    }

    #[test]
    fn update_stamps_editor() {
        let repo = TestRepository::new().with_categories(vec![sample_category(1, "T")]);
        let id = MediaCategoryId::new(1).unwrap();
        let editor = UserId::new(5).unwrap();

        update_category(id, payload("X"), editor, &repo).unwrap();

        let category = get_category(id, &repo).unwrap();
        assert_eq!(category.code.as_str(), "X");
        assert_eq!(category.audit.updated_by, Some(editor));
        assert_eq!(category.audit.created_by, Some(sample_user()));
    }
}
