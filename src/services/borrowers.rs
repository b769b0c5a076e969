use chrono::NaiveDate;

use crate::domain::school_year::{SchoolYear, school_year_choices};
use crate::domain::types::{BorrowerId, UserId};
use crate::dto::borrowers::BorrowerDto;
use crate::forms::borrowers::BorrowerFormPayload;
use crate::repository::{BorrowerListQuery, BorrowerReader, BorrowerWriter};

use super::{ServiceError, ServiceResult, repository_failure};

/// `(value, label)` pairs offered as entry school years on `today`.
pub fn school_year_options(today: NaiveDate, count: usize) -> Vec<(String, String)> {
    school_year_choices(today, count)
}

fn ensure_selectable(year: SchoolYear, today: NaiveDate, count: usize) -> ServiceResult<()> {
    let label = year.label();
    if school_year_choices(today, count)
        .iter()
        .any(|(value, _)| *value == label)
    {
        Ok(())
    } else {
        Err(ServiceError::Form(format!(
            "School year {label} is not one of the selectable entry years"
        )))
    }
}

/// Borrowers with their grade for `today`.
pub fn list_borrowers<R>(
    query: BorrowerListQuery,
    today: NaiveDate,
    repo: &R,
) -> ServiceResult<(usize, Vec<BorrowerDto>)>
where
    R: BorrowerReader,
{
    let (total, borrowers) = repo
        .list_borrowers(query)
        .map_err(|e| repository_failure("list borrowers", e))?;
    let borrowers = borrowers
        .into_iter()
        .map(|b| BorrowerDto::from_borrower(b, today))
        .collect();
    Ok((total, borrowers))
}

pub fn get_borrower<R>(id: BorrowerId, today: NaiveDate, repo: &R) -> ServiceResult<BorrowerDto>
where
    R: BorrowerReader,
{
    match repo.get_borrower_by_id(id) {
        Ok(Some(borrower)) => Ok(BorrowerDto::from_borrower(borrower, today)),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => Err(repository_failure("get borrower", e)),
    }
}

/// Registers a borrower. The entry year must be one of the
/// `entry_year_choices` most recent school years.
pub fn create_borrower<R>(
    payload: BorrowerFormPayload,
    actor: UserId,
    today: NaiveDate,
    entry_year_choices: usize,
    repo: &R,
) -> ServiceResult<BorrowerDto>
where
    R: BorrowerWriter,
{
    ensure_selectable(payload.entry_school_year, today, entry_year_choices)?;

    let created = repo
        .create_borrower(&payload.into_new_borrower(actor))
        .map_err(|e| repository_failure("create borrower", e))?;
    Ok(BorrowerDto::from_borrower(created, today))
}

/// Saves an edited borrower. A stored entry year that has since left the
/// selectable range is kept as is.
pub fn update_borrower<R>(
    id: BorrowerId,
    payload: BorrowerFormPayload,
    actor: UserId,
    today: NaiveDate,
    entry_year_choices: usize,
    repo: &R,
) -> ServiceResult<()>
where
    R: BorrowerReader + BorrowerWriter,
{
    let current = match repo.get_borrower_by_id(id) {
        Ok(Some(borrower)) => borrower,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => return Err(repository_failure("get borrower", e)),
    };
    if current.entry_school_year != payload.entry_school_year {
        ensure_selectable(payload.entry_school_year, today, entry_year_choices)?;
    }

    match repo.update_borrower(id, &payload.into_update(actor)) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("update borrower", e)),
    }
}

pub fn delete_borrower<R>(id: BorrowerId, repo: &R) -> ServiceResult<()>
where
    R: BorrowerWriter,
{
    match repo.delete_borrower(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => Err(repository_failure("delete borrower", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::school_year::DEFAULT_SCHOOL_YEAR_CHOICES;
    use crate::domain::types::{BorrowerClass, GivenName, Grade, Surname};
    use crate::repository::test::{TestRepository, sample_user};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payload(entry: &str, grade: i32) -> BorrowerFormPayload {
        BorrowerFormPayload {
            given_name: GivenName::new("Ada").unwrap(),
            surname: Surname::new("Lovelace").unwrap(),
            entry_school_year: entry.parse().unwrap(),
            initial_grade: Grade::new(grade).unwrap(),
            borrower_class: BorrowerClass::new("3a").unwrap(),
            inactive: false,
            user_id: None,
        }
    }

    #[test]
    fn options_cover_six_school_years() {
        let options = school_year_options(date(2024, 6, 15), DEFAULT_SCHOOL_YEAR_CHOICES);

        assert_eq!(options.len(), 6);
        assert_eq!(options[0].0, "2023/2024");
        assert_eq!(options[5].0, "2018/2019");
    }

    #[test]
    fn grade_is_projected_on_read() {
        let repo = TestRepository::new();
        let created = create_borrower(
            payload("2023/2024", 2),
            sample_user(),
            date(2024, 6, 15),
            DEFAULT_SCHOOL_YEAR_CHOICES,
            &repo,
        )
        .unwrap();
        assert_eq!(created.actual_grade, 2);

        let later = get_borrower(BorrowerId::new(created.id).unwrap(), date(2024, 8, 15), &repo)
            .unwrap();
        assert_eq!(later.actual_grade, 3);
        assert_eq!(later.initial_grade, 2);
    }

    #[test]
    fn entry_year_outside_choices_is_rejected() {
        let repo = TestRepository::new();

        let result = create_borrower(
            payload("2010/2011", 1),
            sample_user(),
            date(2024, 6, 15),
            DEFAULT_SCHOOL_YEAR_CHOICES,
            &repo,
        );

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn old_entry_year_survives_unrelated_edit() {
        let repo = TestRepository::new();
        create_borrower(
            payload("2019/2020", 1),
            sample_user(),
            date(2020, 1, 10),
            DEFAULT_SCHOOL_YEAR_CHOICES,
            &repo,
        )
        .unwrap();
        let mut edited = payload("2019/2020", 1);
        edited.inactive = true;

        let id = BorrowerId::new(1).unwrap();
        update_borrower(
            id,
            edited,
            sample_user(),
            date(2030, 1, 10),
            DEFAULT_SCHOOL_YEAR_CHOICES,
            &repo,
        )
        .unwrap();

        let (total, _) = list_borrowers(
            BorrowerListQuery::default().inactive(true),
            date(2030, 1, 10),
            &repo,
        )
        .unwrap();
        assert_eq!(total, 1);
    }
}
