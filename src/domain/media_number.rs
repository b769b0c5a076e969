//! Media number assignment.
//!
//! Every media item is identified by its category code followed by a
//! zero-padded sequence, e.g. `T0001`. The sequence continues from the highest
//! number already used in the category unless a legacy number from the old
//! catalogue is carried over.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::{CategoryCode, TypeConstraintError};

/// Width the numeric part of a media number is padded to.
pub const SEQUENCE_WIDTH: usize = 4;

const MAX_LEGACY_NUMBER: u32 = 9999;

/// Number of a media item in the pre-existing catalogue (`0001`-`9999`).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct LegacyMediaNumber(String);

impl LegacyMediaNumber {
    /// Accepts 1 to 4 ASCII digits with a value between 1 and 9999.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_string();
        let invalid = || TypeConstraintError::InvalidLegacyNumber(value.clone());
        if value.is_empty()
            || value.len() > SEQUENCE_WIDTH
            || !value.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }
        let number: u32 = value.parse().map_err(|_| invalid())?;
        if number == 0 || number > MAX_LEGACY_NUMBER {
            return Err(invalid());
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the legacy number.
    pub fn sequence(&self) -> u32 {
        self.0.parse().unwrap_or_default()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for LegacyMediaNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LegacyMediaNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Canonical media identifier: category code plus padded sequence.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct MediaNumber(String);

impl MediaNumber {
    /// Builds the identifier for `sequence` within `code`.
    pub fn compose(code: &CategoryCode, sequence: u32) -> Self {
        Self(format!(
            "{}{:0width$}",
            code.as_str(),
            sequence,
            width = SEQUENCE_WIDTH
        ))
    }

    /// Wraps a number read back from storage.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString("media number"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for MediaNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<&str> for MediaNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Highest sequence among `existing` numbers of the category `code`.
///
/// Numbers that do not carry the prefix or whose suffix is not numeric are
/// skipped. The comparison is numeric, so `T10000` ranks above `T9999`.
pub fn max_sequence<'a, I>(code: &CategoryCode, existing: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    existing
        .into_iter()
        .filter_map(|number| number.strip_prefix(code.as_str())?.parse::<u32>().ok())
        .max()
}

/// Media number for a new record.
///
/// A legacy number wins regardless of the current sequence. Otherwise the
/// sequence continues from `existing_max`, starting at 1 for an empty category.
pub fn assign_media_number(
    code: &CategoryCode,
    legacy: Option<&LegacyMediaNumber>,
    existing_max: Option<u32>,
) -> MediaNumber {
    match legacy {
        Some(legacy) => MediaNumber::compose(code, legacy.sequence()),
        None => {
            let next = existing_max.map_or(1, |max| max.saturating_add(1));
            MediaNumber::compose(code, next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(value: &str) -> CategoryCode {
        CategoryCode::new(value).unwrap()
    }

    #[test]
    fn first_media_in_category_gets_sequence_one() {
        assert_eq!(assign_media_number(&code("T"), None, None), "T0001");
    }

    #[test]
    fn continues_after_existing_maximum() {
        assert_eq!(assign_media_number(&code("T"), None, Some(1)), "T0002");
        assert_eq!(assign_media_number(&code("LTB"), None, Some(41)), "LTB0042");
    }

    #[test]
    fn legacy_number_overrides_sequence() {
        let legacy = LegacyMediaNumber::new("0015").unwrap();
        assert_eq!(
            assign_media_number(&code("T"), Some(&legacy), Some(120)),
            "T0015"
        );
    }

    #[test]
    fn legacy_number_is_left_padded() {
        let legacy = LegacyMediaNumber::new("7").unwrap();
        assert_eq!(assign_media_number(&code("AB"), Some(&legacy), None), "AB0007");
    }

    #[test]
    fn sequence_grows_past_four_digits() {
        assert_eq!(assign_media_number(&code("T"), None, Some(9999)), "T10000");
    }

    #[test]
    fn max_sequence_is_numeric_and_prefix_scoped() {
        let existing = ["T0002", "T10000", "T9999", "Tabc", "X0500"];
        assert_eq!(max_sequence(&code("T"), existing), Some(10000));
        assert_eq!(max_sequence(&code("Q"), existing), None);
    }

    #[test]
    fn legacy_number_validation() {
        assert!(LegacyMediaNumber::new("0001").is_ok());
        assert!(LegacyMediaNumber::new("9999").is_ok());
        assert!(LegacyMediaNumber::new("0000").is_err());
        assert!(LegacyMediaNumber::new("10000").is_err());
        assert!(LegacyMediaNumber::new("12a").is_err());
        assert!(LegacyMediaNumber::new("").is_err());
        assert!(LegacyMediaNumber::new("+12").is_err());
    }
}
