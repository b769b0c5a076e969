use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::audit::{AuditFields, Revision};
use crate::domain::school_year::{SchoolYear, project_grade};
use crate::domain::types::{BorrowerClass, BorrowerId, GivenName, Grade, Surname, UserId};

/// A student allowed to borrow media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Borrower {
    pub id: BorrowerId,
    pub given_name: GivenName,
    pub surname: Surname,
    pub entry_school_year: SchoolYear,
    pub initial_grade: Grade,
    pub borrower_class: BorrowerClass,
    pub inactive: bool,
    pub user_id: Option<UserId>,
    pub audit: AuditFields,
}

impl Borrower {
    /// Grade the borrower is in on `today`, derived from the entry year.
    pub fn actual_grade(&self, today: NaiveDate) -> Grade {
        project_grade(
            self.entry_school_year,
            self.initial_grade,
            SchoolYear::containing(today),
        )
    }
}

impl Display for Borrower {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.given_name, self.surname)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBorrower {
    pub given_name: GivenName,
    pub surname: Surname,
    pub entry_school_year: SchoolYear,
    pub initial_grade: Grade,
    pub borrower_class: BorrowerClass,
    pub inactive: bool,
    pub user_id: Option<UserId>,
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BorrowerUpdate {
    pub given_name: GivenName,
    pub surname: Surname,
    pub entry_school_year: SchoolYear,
    pub initial_grade: Grade,
    pub borrower_class: BorrowerClass,
    pub inactive: bool,
    pub user_id: Option<UserId>,
    pub revision: Revision,
}
