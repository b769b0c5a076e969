use std::collections::HashSet;
use std::thread;

use chrono::Utc;
use schulbib::domain::audit::AuditFields;
use schulbib::domain::borrower::NewBorrower;
use schulbib::domain::category::{MediaCategory, MediaCategoryUpdate, NewMediaCategory};
use schulbib::domain::library_site::NewLibrarySite;
use schulbib::domain::media::NewMedia;
use schulbib::domain::media_number::LegacyMediaNumber;
use schulbib::domain::media_type::NewMediaType;
use schulbib::domain::school_year::SchoolYear;
use schulbib::domain::types::{
    BorrowerClass, CategoryCode, CategoryName, ColourCode, ColourName, GivenName, Grade,
    LibrarySiteId, MediaTitle, MediaTypeId, MediaTypeName, SiteName, Surname, UserId,
};
use schulbib::repository::{
    BorrowerListQuery, BorrowerReader, BorrowerWriter, DieselRepository, LibrarySiteWriter,
    MediaCategoryReader, MediaCategoryWriter, MediaListQuery, MediaReader, MediaTypeWriter,
    MediaWriter, RepositoryError,
};

mod common;

fn actor() -> UserId {
    UserId::new(1).expect("valid user id")
}

fn audit() -> AuditFields {
    AuditFields::stamp_new(actor(), Utc::now().naive_utc())
}

struct Fixture {
    site_id: LibrarySiteId,
    media_type_id: MediaTypeId,
}

fn setup(repo: &DieselRepository) -> Fixture {
    let site = repo
        .create_site(&NewLibrarySite {
            name: SiteName::new("Main building").expect("valid site name"),
            description: None,
            opening_hours: None,
            is_active: true,
            audit: audit(),
        })
        .expect("should create site");
    let media_type = repo
        .create_media_type(&NewMediaType {
            name: MediaTypeName::new("Book").expect("valid type name"),
            audit: audit(),
        })
        .expect("should create media type");
    Fixture {
        site_id: site.id,
        media_type_id: media_type.id,
    }
}

fn new_category(code: &str) -> NewMediaCategory {
    NewMediaCategory {
        code: CategoryCode::new(code).expect("valid code"),
        name: CategoryName::new(format!("Category {code}")).expect("valid name"),
        colour: ColourName::new("green").expect("valid colour"),
        colour_code: ColourCode::new("#00ff00").expect("valid colour code"),
        description: None,
        audit: audit(),
    }
}

fn create_category(repo: &DieselRepository, code: &str) -> MediaCategory {
    repo.create_category(&new_category(code))
        .expect("should create category")
}

fn new_media(fixture: &Fixture, category: &MediaCategory, legacy: Option<&str>) -> NewMedia {
    NewMedia {
        title: MediaTitle::new("Momo").expect("valid title"),
        authors: None,
        site_id: fixture.site_id,
        category_id: category.id,
        media_type_id: fixture.media_type_id,
        legacy_media_number: legacy.map(|n| LegacyMediaNumber::new(n).expect("valid legacy")),
        isbn13: None,
        acquisition_date: None,
        price: None,
        left_library_date: None,
        comments: None,
        publisher: None,
        publishing_date: None,
        short_description: None,
        media_file: None,
        audit: audit(),
    }
}

fn new_borrower(given: &str, surname: &str, user_id: Option<i32>) -> NewBorrower {
    NewBorrower {
        given_name: GivenName::new(given).expect("valid given name"),
        surname: Surname::new(surname).expect("valid surname"),
        entry_school_year: SchoolYear::starting(2023),
        initial_grade: Grade::new(2).expect("valid grade"),
        borrower_class: BorrowerClass::new("3a").expect("valid class"),
        inactive: false,
        user_id: user_id.map(|id| UserId::new(id).expect("valid user id")),
        audit: audit(),
    }
}

#[test]
fn media_numbers_continue_per_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let fixture = setup(&repo);
    let textbooks = create_category(&repo, "T");
    let games = create_category(&repo, "SP");

    let number = |category: &MediaCategory, legacy: Option<&str>| {
        repo.create_media(&new_media(&fixture, category, legacy))
            .expect("should create media")
            .media_number
            .into_inner()
    };

    assert_eq!(number(&textbooks, None), "T0001");
    assert_eq!(number(&textbooks, None), "T0002");
    assert_eq!(number(&games, None), "SP0001");
    assert_eq!(number(&textbooks, Some("0015")), "T0015");
    assert_eq!(number(&textbooks, None), "T0016");

    let found = repo
        .get_media_by_number("T0015")
        .expect("should query media")
        .expect("media should exist");
    assert_eq!(
        found.legacy_media_number.map(|n| n.into_inner()),
        Some("0015".to_string())
    );
}

#[test]
fn concurrent_creates_get_distinct_numbers() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 10;

    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let fixture = setup(&repo);
    let category = create_category(&repo, "T");

    let numbers: Vec<String> = thread::scope(|scope| {
        let workers: Vec<_> = (0..THREADS)
            .map(|_| {
                let repo = DieselRepository::new(test_db.pool());
                let fixture = &fixture;
                let category = &category;
                scope.spawn(move || {
                    (0..PER_THREAD)
                        .map(|_| {
                            repo.create_media(&new_media(fixture, category, None))
                                .expect("concurrent create should succeed")
                                .media_number
                                .into_inner()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().expect("worker should not panic"))
            .collect()
    });

    let distinct: HashSet<&str> = numbers.iter().map(String::as_str).collect();
    assert_eq!(numbers.len(), THREADS * PER_THREAD);
    assert_eq!(distinct.len(), THREADS * PER_THREAD);
    assert!(distinct.contains("T0001"));
    assert!(distinct.contains("T0080"));

    let (total, _) = repo
        .list_media(MediaListQuery::default().category(category.id))
        .expect("should list media");
    assert_eq!(total, THREADS * PER_THREAD);
}

#[test]
fn reused_legacy_number_is_a_conflict() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let fixture = setup(&repo);
    let category = create_category(&repo, "T");

    repo.create_media(&new_media(&fixture, &category, Some("0042")))
        .expect("should create media");
    let result = repo.create_media(&new_media(&fixture, &category, Some("42")));

    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    let (total, _) = repo
        .list_media(MediaListQuery::default())
        .expect("should list media");
    assert_eq!(total, 1);
}

#[test]
fn media_search_and_category_filter() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let fixture = setup(&repo);
    let textbooks = create_category(&repo, "T");
    let games = create_category(&repo, "SP");

    repo.create_media(&new_media(&fixture, &textbooks, None))
        .expect("should create media");
    repo.create_media(&new_media(&fixture, &games, None))
        .expect("should create media");

    let (total, items) = repo
        .list_media(MediaListQuery::default().category(games.id))
        .expect("should list media");
    assert_eq!(total, 1);
    assert_eq!(items[0].media_number, "SP0001");

    let (total, _) = repo
        .list_media(MediaListQuery::default().search("T000"))
        .expect("should search media");
    assert_eq!(total, 1);

    let (total, items) = repo
        .list_media(MediaListQuery::default().paginate(2, 1))
        .expect("should page media");
    assert_eq!(total, 2);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].media_number, "T0001");
}

#[test]
fn category_code_is_fixed_once_referenced() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let fixture = setup(&repo);
    let category = create_category(&repo, "T");

    let rename = |code: &str| MediaCategoryUpdate {
        code: CategoryCode::new(code).expect("valid code"),
        name: category.name.clone(),
        colour: category.colour.clone(),
        colour_code: category.colour_code.clone(),
        description: None,
        revision: AuditFields::revision(actor(), Utc::now().naive_utc()),
    };

    repo.update_category(category.id, &rename("X"))
        .expect("unused category may be renamed");

    repo.create_media(&new_media(&fixture, &category, None))
        .expect("should create media");

    let result = repo.update_category(category.id, &rename("Y"));
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));

    let stored = repo
        .get_category_by_id(category.id)
        .expect("should query category")
        .expect("category should exist");
    assert_eq!(stored.code.as_str(), "X");
}

#[test]
fn referenced_category_cannot_be_deleted() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let fixture = setup(&repo);
    let category = create_category(&repo, "T");
    repo.create_media(&new_media(&fixture, &category, None))
        .expect("should create media");

    let result = repo.delete_category(category.id);

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[test]
fn deleting_a_referenced_site_or_type_keeps_the_media() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let fixture = setup(&repo);
    let category = create_category(&repo, "T");
    let media = repo
        .create_media(&new_media(&fixture, &category, None))
        .expect("should create media");

    assert!(matches!(
        repo.delete_site(fixture.site_id),
        Err(RepositoryError::ConstraintViolation(_))
    ));
    assert!(matches!(
        repo.delete_media_type(fixture.media_type_id),
        Err(RepositoryError::ConstraintViolation(_))
    ));
    assert_eq!(
        repo.get_media_by_id(media.id)
            .expect("should read media")
            .map(|media| media.media_number),
        Some(media.media_number)
    );
}

#[test]
fn duplicate_category_code_is_a_constraint_violation() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    create_category(&repo, "T");

    let result = repo.create_category(&new_category("T"));

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}

#[test]
fn borrowers_are_searched_and_linked_users_are_unique() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_borrower(&new_borrower("Ada", "Lovelace", Some(10)))
        .expect("should create borrower");
    repo.create_borrower(&new_borrower("Alan", "Turing", None))
        .expect("should create borrower");

    let (total, borrowers) = repo
        .list_borrowers(BorrowerListQuery::default())
        .expect("should list borrowers");
    assert_eq!(total, 2);
    assert_eq!(borrowers[0].surname.as_str(), "Lovelace");

    let (total, borrowers) = repo
        .list_borrowers(BorrowerListQuery::default().search("turi"))
        .expect("should search borrowers");
    assert_eq!(total, 1);
    assert_eq!(borrowers[0].given_name.as_str(), "Alan");

    let (total, _) = repo
        .list_borrowers(BorrowerListQuery::default().entry_school_year(SchoolYear::starting(2023)))
        .expect("should filter borrowers");
    assert_eq!(total, 2);

    let result = repo.create_borrower(&new_borrower("Grace", "Hopper", Some(10)));
    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
}
