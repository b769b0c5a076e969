use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::domain::audit::AuditFields;
use crate::domain::borrower::{BorrowerUpdate, NewBorrower};
use crate::domain::school_year::SchoolYear;
use crate::domain::types::{BorrowerClass, GivenName, Grade, Surname, UserId};
use crate::forms::FormError;

/// Add or edit form for a borrower.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BorrowerForm {
    #[validate(length(min = 1, max = 255))]
    pub given_name: String,
    #[validate(length(min = 1, max = 255))]
    pub surname: String,
    /// Label such as `2024/2025`.
    #[validate(length(min = 1))]
    pub entry_school_year: String,
    #[validate(range(min = 0))]
    pub initial_grade: i32,
    #[validate(length(min = 1, max = 10))]
    pub borrower_class: String,
    #[serde(default)]
    pub inactive: bool,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub user_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorrowerFormPayload {
    pub given_name: GivenName,
    pub surname: Surname,
    pub entry_school_year: SchoolYear,
    pub initial_grade: Grade,
    pub borrower_class: BorrowerClass,
    pub inactive: bool,
    pub user_id: Option<UserId>,
}

impl BorrowerFormPayload {
    pub fn into_new_borrower(self, actor: UserId) -> NewBorrower {
        let now = Utc::now().naive_utc();
        NewBorrower {
            given_name: self.given_name,
            surname: self.surname,
            entry_school_year: self.entry_school_year,
            initial_grade: self.initial_grade,
            borrower_class: self.borrower_class,
            inactive: self.inactive,
            user_id: self.user_id,
            audit: AuditFields::stamp_new(actor, now),
        }
    }

    pub fn into_update(self, actor: UserId) -> BorrowerUpdate {
        let now = Utc::now().naive_utc();
        BorrowerUpdate {
            given_name: self.given_name,
            surname: self.surname,
            entry_school_year: self.entry_school_year,
            initial_grade: self.initial_grade,
            borrower_class: self.borrower_class,
            inactive: self.inactive,
            user_id: self.user_id,
            revision: AuditFields::revision(actor, now),
        }
    }
}

impl TryFrom<BorrowerForm> for BorrowerFormPayload {
    type Error = FormError;

    fn try_from(value: BorrowerForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            given_name: GivenName::new(value.given_name)?,
            surname: Surname::new(value.surname)?,
            entry_school_year: value.entry_school_year.parse()?,
            initial_grade: Grade::new(value.initial_grade)?,
            borrower_class: BorrowerClass::new(value.borrower_class)?,
            inactive: value.inactive,
            user_id: value.user_id.map(UserId::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> BorrowerForm {
        serde_json::from_str(
            r#"{
                "given_name": "Ada",
                "surname": "Lovelace",
                "entry_school_year": "2023/2024",
                "initial_grade": 2,
                "borrower_class": "3a"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn defaults_to_active_without_user() {
        let payload: BorrowerFormPayload = form().try_into().unwrap();
        assert!(!payload.inactive);
        assert!(payload.user_id.is_none());
        assert_eq!(payload.entry_school_year, SchoolYear::starting(2023));
    }

    #[test]
    fn rejects_non_consecutive_school_year() {
        let mut form = form();
        form.entry_school_year = "2023/2025".to_string();
        assert!(matches!(
            BorrowerFormPayload::try_from(form),
            Err(FormError::TypeConstraint(_))
        ));
    }

    #[test]
    fn rejects_school_year_past_the_year_range() {
        let mut form = form();
        form.entry_school_year = "2147483647/0".to_string();
        assert!(matches!(
            BorrowerFormPayload::try_from(form),
            Err(FormError::TypeConstraint(_))
        ));
    }

    #[test]
    fn rejects_long_class() {
        let mut form = form();
        form.borrower_class = "x".repeat(11);
        assert!(matches!(
            BorrowerFormPayload::try_from(form),
            Err(FormError::Validation(_))
        ));
    }
}
