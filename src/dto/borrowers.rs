use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::borrower::Borrower;

/// Borrower as listed in the admin UI, with the grade derived for today.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BorrowerDto {
    pub id: i32,
    pub given_name: String,
    pub surname: String,
    pub entry_school_year: String,
    pub initial_grade: i32,
    pub actual_grade: i32,
    pub borrower_class: String,
    pub inactive: bool,
    pub user_id: Option<i32>,
}

impl BorrowerDto {
    pub fn from_borrower(value: Borrower, today: NaiveDate) -> Self {
        let actual_grade = value.actual_grade(today).get();
        Self {
            id: value.id.get(),
            given_name: value.given_name.into_inner(),
            surname: value.surname.into_inner(),
            entry_school_year: value.entry_school_year.label(),
            initial_grade: value.initial_grade.get(),
            actual_grade,
            borrower_class: value.borrower_class.into_inner(),
            inactive: value.inactive,
            user_id: value.user_id.map(|id| id.get()),
        }
    }
}
