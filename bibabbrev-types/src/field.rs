//! Field identifiers.
//!
//! A [`Field`] names one attribute of a bibliographic entry. Names are
//! case-insensitive: `Journal`, `JOURNAL` and `journal` are the same field.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Identifier of a bibliographic field, stored in lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Field(Cow<'static, str>);

impl Field {
    /// The primary journal name field.
    pub const JOURNAL: Field = Field(Cow::Borrowed("journal"));

    /// The long-form journal name field used by biblatex.
    pub const JOURNALTITLE: Field = Field(Cow::Borrowed("journaltitle"));

    /// Holds the full journal name once the journal field has been abbreviated.
    pub const FJOURNAL: Field = Field(Cow::Borrowed("fjournal"));

    /// Creates a field from any name, normalizing it to lowercase.
    ///
    /// Use [`str::parse`] instead when the name comes from untrusted input
    /// and must be validated.
    pub fn new(name: impl Into<String>) -> Self {
        let name: String = name.into();
        if name.chars().any(char::is_uppercase) {
            Self(Cow::Owned(name.to_lowercase()))
        } else {
            Self(Cow::Owned(name))
        }
    }

    /// Returns the normalized field name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true for the fields that hold a journal name
    /// (`journal` and `journaltitle`).
    pub fn is_journal_name(&self) -> bool {
        *self == Self::JOURNAL || *self == Self::JOURNALTITLE
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Field {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(crate::Error::InvalidField(s.to_string()));
        }
        Ok(Self::new(name))
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Field> for String {
    fn from(field: Field) -> Self {
        field.0.into_owned()
    }
}

impl AsRef<str> for Field {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
