//! School years and grade progression.
//!
//! A school year runs from July to June and is labelled `"start/end"`, for
//! example `"2024/2025"`. Borrower grades are stored as the grade at entry and
//! projected forward from the current school year on every read.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::domain::types::{Grade, TypeConstraintError};

/// Number of school years offered when picking an entry year.
pub const DEFAULT_SCHOOL_YEAR_CHOICES: usize = 6;

/// First month (July) that belongs to the school year starting this calendar year.
const SCHOOL_YEAR_START_MONTH: u32 = 7;

/// Academic year identified by its starting calendar year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchoolYear {
    start: i32,
}

impl SchoolYear {
    pub const fn starting(start: i32) -> Self {
        Self { start }
    }

    /// School year that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        if date.month() < SCHOOL_YEAR_START_MONTH {
            Self::starting(date.year() - 1)
        } else {
            Self::starting(date.year())
        }
    }

    pub const fn start_year(self) -> i32 {
        self.start
    }

    pub const fn end_year(self) -> i32 {
        self.start.saturating_add(1)
    }

    /// The school year `years` before this one.
    pub const fn preceding(self, years: i32) -> Self {
        Self::starting(self.start.saturating_sub(years))
    }

    pub fn label(self) -> String {
        self.to_string()
    }
}

impl Display for SchoolYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start_year(), self.end_year())
    }
}

impl FromStr for SchoolYear {
    type Err = TypeConstraintError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || TypeConstraintError::InvalidSchoolYear(value.to_string());
        let (start, end) = value.trim().split_once('/').ok_or_else(invalid)?;
        let start: i32 = start.trim().parse().map_err(|_| invalid())?;
        let end: i32 = end.trim().parse().map_err(|_| invalid())?;
        if start.checked_add(1) != Some(end) {
            return Err(invalid());
        }
        Ok(Self::starting(start))
    }
}

impl TryFrom<String> for SchoolYear {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for SchoolYear {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SchoolYear> for String {
    fn from(value: SchoolYear) -> Self {
        value.to_string()
    }
}

/// Label of the school year active on `today`.
pub fn current_school_year(today: NaiveDate) -> String {
    SchoolYear::containing(today).label()
}

/// `(value, label)` pairs for the current school year and the `count - 1`
/// preceding ones, most recent first.
pub fn school_year_choices(today: NaiveDate, count: usize) -> Vec<(String, String)> {
    let current = SchoolYear::containing(today);
    (0..count)
        .map(|offset| {
            let label = current.preceding(offset as i32).label();
            (label.clone(), label)
        })
        .collect()
}

/// Grade a borrower is in during `current_school_year`.
///
/// Only the starting year of each label is used. The grade never drops below
/// `initial_grade`, even when the entry year lies in the future. Years too far
/// apart to count are rejected as an invalid school year.
pub fn actual_grade(
    entry_school_year: &str,
    initial_grade: i32,
    current_school_year: &str,
) -> Result<i32, TypeConstraintError> {
    let entry_year = start_year(entry_school_year)?;
    let current_year = start_year(current_school_year)?;
    let out_of_range = || {
        TypeConstraintError::InvalidSchoolYear(format!(
            "{entry_school_year} .. {current_school_year}"
        ))
    };
    let year_difference = current_year
        .checked_sub(entry_year)
        .ok_or_else(out_of_range)?
        .max(0);
    initial_grade
        .checked_add(year_difference)
        .ok_or_else(out_of_range)
}

/// Typed variant of [`actual_grade`] used by the borrower entity.
pub fn project_grade(entry: SchoolYear, initial_grade: Grade, current: SchoolYear) -> Grade {
    let year_difference = current
        .start_year()
        .saturating_sub(entry.start_year())
        .max(0);
    // Non-negative plus non-negative stays non-negative.
    Grade::new(initial_grade.get().saturating_add(year_difference)).unwrap_or(initial_grade)
}

fn start_year(label: &str) -> Result<i32, TypeConstraintError> {
    label
        .split('/')
        .next()
        .and_then(|token| token.trim().parse().ok())
        .ok_or_else(|| TypeConstraintError::InvalidSchoolYear(label.to_string()))
}
