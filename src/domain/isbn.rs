//! ISBN-13 checksum validation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::TypeConstraintError;

const ISBN13_LEN: usize = 13;

/// Returns `true` when `value`, rendered as a string, is a valid ISBN-13.
///
/// The rendered form must be exactly 13 ASCII digits and the last digit must
/// match the weighted checksum (weights 1 and 3 alternating) of the first 12.
/// Malformed input yields `false`; the function never panics.
pub fn validate_isbn13<T: Display + ?Sized>(value: &T) -> bool {
    let rendered = value.to_string();
    if rendered.len() != ISBN13_LEN || !rendered.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = rendered.bytes().map(|b| u32::from(b - b'0')).collect();

    let total: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
        .sum();

    let remainder = total % 10;
    let check_digit = if remainder == 0 { 0 } else { 10 - remainder };

    check_digit == digits[12]
}

/// ISBN-13 that passed checksum validation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Isbn13(String);

impl Isbn13 {
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into().trim().to_string();
        if validate_isbn13(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::InvalidIsbn13)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for Isbn13 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Isbn13 {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [&str; 4] = [
        "9781861972712",
        "9780306406157",
        "9783161484100",
        "9780000000002",
    ];

    #[test]
    fn accepts_known_valid_isbns() {
        for isbn in VALID {
            assert!(validate_isbn13(isbn), "{isbn} should be valid");
        }
    }

    #[test]
    fn accepts_integers() {
        assert!(validate_isbn13(&9781861972712_u64));
        assert!(!validate_isbn13(&9781861972718_u64));
    }

    #[test]
    fn rejects_wrong_check_digit() {
        assert!(!validate_isbn13("9781861972718"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!validate_isbn13("97818619727"));
        assert!(!validate_isbn13("97818619727120"));
        assert!(!validate_isbn13(""));
    }

    #[test]
    fn rejects_non_digit_characters() {
        assert!(!validate_isbn13("978-186197271"));
        assert!(!validate_isbn13("97818619727X2"));
        assert!(!validate_isbn13("٩٧٨١٨٦١٩٧٢٧١٢"));
    }

    #[test]
    fn rejects_list_shaped_input() {
        let rendered = format!("{:?}", [9781861972712_u64]);
        assert!(!validate_isbn13(&rendered));
    }

    #[test]
    fn flipping_any_single_digit_invalidates() {
        for isbn in VALID {
            for pos in 0..13 {
                let mut bytes = isbn.as_bytes().to_vec();
                let original = bytes[pos] - b'0';
                for replacement in (0..10u8).filter(|d| *d != original) {
                    bytes[pos] = b'0' + replacement;
                    let candidate = String::from_utf8(bytes.clone()).unwrap();
                    assert!(
                        !validate_isbn13(&candidate),
                        "{candidate} derived from {isbn} should be invalid"
                    );
                }
            }
        }
    }

    #[test]
    fn isbn_type_trims_and_validates() {
        assert_eq!(Isbn13::new(" 9781861972712 ").unwrap().as_str(), "9781861972712");
        assert_eq!(
            Isbn13::new("9781861972718").unwrap_err(),
            TypeConstraintError::InvalidIsbn13
        );
    }
}
