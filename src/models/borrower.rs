use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::borrower::{Borrower as DomainBorrower, NewBorrower as DomainNewBorrower};
use crate::domain::types::{BorrowerClass, GivenName, Grade, Surname, TypeConstraintError, UserId};
use crate::models::audit_from_row;

/// Diesel model representing the `borrowers` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::borrowers)]
pub struct Borrower {
    pub id: i32,
    pub given_name: String,
    pub surname: String,
    pub entry_school_year: String,
    pub initial_grade: i32,
    pub borrower_class: String,
    pub inactive: bool,
    pub user_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::borrowers)]
pub struct NewBorrower<'a> {
    pub given_name: &'a str,
    pub surname: &'a str,
    pub entry_school_year: String,
    pub initial_grade: i32,
    pub borrower_class: &'a str,
    pub inactive: bool,
    pub user_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
}

impl TryFrom<Borrower> for DomainBorrower {
    type Error = TypeConstraintError;

    fn try_from(borrower: Borrower) -> Result<Self, Self::Error> {
        Ok(Self {
            id: borrower.id.try_into()?,
            given_name: GivenName::new(borrower.given_name)?,
            surname: Surname::new(borrower.surname)?,
            entry_school_year: borrower.entry_school_year.parse()?,
            initial_grade: Grade::new(borrower.initial_grade)?,
            borrower_class: BorrowerClass::new(borrower.borrower_class)?,
            inactive: borrower.inactive,
            user_id: borrower.user_id.map(UserId::new).transpose()?,
            audit: audit_from_row(
                borrower.created_at,
                borrower.updated_at,
                borrower.created_by,
                borrower.updated_by,
            )?,
        })
    }
}

impl<'a> From<&'a DomainNewBorrower> for NewBorrower<'a> {
    fn from(borrower: &'a DomainNewBorrower) -> Self {
        Self {
            given_name: borrower.given_name.as_str(),
            surname: borrower.surname.as_str(),
            entry_school_year: borrower.entry_school_year.label(),
            initial_grade: borrower.initial_grade.get(),
            borrower_class: borrower.borrower_class.as_str(),
            inactive: borrower.inactive,
            user_id: borrower.user_id.map(i32::from),
            created_at: borrower.audit.created_at,
            updated_at: borrower.audit.updated_at,
            created_by: borrower.audit.created_by.map(i32::from),
            updated_by: borrower.audit.updated_by.map(i32::from),
        }
    }
}
