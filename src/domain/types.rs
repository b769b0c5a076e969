//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded the column width.
    #[error("{0} must be at most {1} characters")]
    TooLong(&'static str, usize),
    /// A number exceeded the largest value its column holds.
    #[error("{0} is too large")]
    TooLarge(&'static str),
    /// Hex colour code did not match `#rgb` or `#rrggbb`.
    #[error("Enter a valid hex colour code (e.g., #000000 for black).")]
    InvalidColourCode,
    /// ISBN-13 checksum or shape failed.
    #[error("The ISBN-13 number is not valid.")]
    InvalidIsbn13,
    /// School year label was not `YYYY/YYYY` with consecutive years.
    #[error("invalid school year: {0}")]
    InvalidSchoolYear(String),
    /// Legacy media number was not 1-4 digits in 0001-9999.
    #[error("legacy media number must be between 0001 and 9999: {0}")]
    InvalidLegacyNumber(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

fn require_max_chars(
    value: String,
    field: &'static str,
    max: usize,
) -> Result<String, TypeConstraintError> {
    if value.chars().count() > max {
        Err(TypeConstraintError::TooLong(field, max))
    } else {
        Ok(value)
    }
}

/// Converts an optional text input, treating blank strings as absent.
pub fn optional_text<T>(
    value: Option<String>,
    ctor: impl FnOnce(String) -> Result<T, TypeConstraintError>,
) -> Result<Option<T>, TypeConstraintError> {
    value.filter(|v| !v.trim().is_empty()).map(ctor).transpose()
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        non_empty_string_newtype!($name, $doc, $field, usize::MAX);
    };
    ($name:ident, $doc:expr, $field:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value within the column width.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                Ok(Self(require_max_chars(trimmed, $field, $max)?))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! non_negative_f64_newtype {
    ($name:ident, $doc:expr, $field:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Constructs a finite value that is zero or greater, rounded to
            /// two decimal places.
            pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
                if !value.is_finite() || value < 0.0 {
                    return Err(TypeConstraintError::NegativeNumber($field));
                }
                let rounded = (value * 100.0).round() / 100.0;
                if rounded > $max {
                    return Err(TypeConstraintError::TooLarge($field));
                }
                Ok(Self(rounded))
            }

            /// Returns the raw `f64` value.
            pub const fn get(self) -> f64 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{:.2}", self.0)
            }
        }

        impl TryFrom<f64> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: f64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

macro_rules! non_negative_i32_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Constructs a value that must be zero or greater.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value >= 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NegativeNumber($field))
                }
            }

            /// Returns the raw `i32` value.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

id_newtype!(
    MediaCategoryId,
    "Unique identifier for a media category.",
    "category_id"
);
id_newtype!(
    MediaTypeId,
    "Unique identifier for a media type.",
    "media_type_id"
);
id_newtype!(
    LibrarySiteId,
    "Unique identifier for a library site.",
    "site_id"
);
id_newtype!(MediaId, "Unique identifier for a media item.", "media_id");
id_newtype!(BorrowerId, "Unique identifier for a borrower.", "borrower_id");
id_newtype!(
    UserId,
    "Identifier of a user managed by the identity provider.",
    "user_id"
);

non_empty_string_newtype!(
    CategoryCode,
    "Short category code used as the media number prefix, e.g. `LTB`.",
    "category code",
    3
);
non_empty_string_newtype!(CategoryName, "Category display name.", "category name", 255);
non_empty_string_newtype!(ColourName, "Colour name, e.g. `green`.", "colour", 50);
non_empty_string_newtype!(
    MediaTypeName,
    "Media type name, e.g. Book, Game, Music CD.",
    "media type name",
    255
);
non_empty_string_newtype!(SiteName, "Library site name.", "site name", 255);
non_empty_string_newtype!(MediaTitle, "Full title of a media item.", "title", 255);
non_empty_string_newtype!(Authors, "Authors of a media item.", "authors", 255);
non_empty_string_newtype!(Publisher, "Publisher of a media item.", "publisher", 255);
non_empty_string_newtype!(GivenName, "Given name of a borrower.", "given name", 255);
non_empty_string_newtype!(Surname, "Surname of a borrower.", "surname", 255);
non_empty_string_newtype!(
    BorrowerClass,
    "Class the borrower belongs to, e.g. `4b`.",
    "borrower class",
    10
);
non_empty_string_newtype!(Description, "Free-form description text.", "description");
non_empty_string_newtype!(OpeningHours, "Opening hours of a site.", "opening hours");
non_empty_string_newtype!(Comments, "Additional comments.", "comments");
non_empty_string_newtype!(
    MediaFileRef,
    "Reference to an uploaded file kept by the storage collaborator.",
    "media file"
);

non_negative_f64_newtype!(
    MediaPrice,
    "Non-negative price of a media item, kept to cents.",
    "price",
    99_999_999.99
);

non_negative_i32_newtype!(Grade, "School grade level.", "grade");

/// Hex colour code in `#rgb` or `#rrggbb` form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ColourCode(String);

impl ColourCode {
    /// Validates the hex format after trimming.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "colour code")?;
        let digits = trimmed
            .strip_prefix('#')
            .ok_or(TypeConstraintError::InvalidColourCode)?;
        let valid_len = digits.len() == 3 || digits.len() == 6;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypeConstraintError::InvalidColourCode);
        }
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ColourCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ColourCode {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
