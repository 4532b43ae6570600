use crate::{JournalError, JournalResult};
use serde::{Deserialize, Serialize};

/// Which abbreviation variant to write into a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbbreviationType {
    /// The abbreviation as listed, e.g. `J. Chem. Phys.`.
    #[default]
    Default,
    /// Dotless Medline style, e.g. `J Chem Phys`.
    Medline,
    /// The shortest abbreviation that still identifies the journal.
    ShortestUnique,
}

/// A known journal and its abbreviations.
///
/// Every variant is non-empty: construction rejects a blank name or
/// abbreviation, and a missing shortest-unique form falls back to the
/// default abbreviation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAbbreviation", into = "RawAbbreviation")]
pub struct Abbreviation {
    name: String,
    abbreviation: String,
    medline_abbreviation: String,
    shortest_unique_abbreviation: String,
}

impl Abbreviation {
    /// Creates a record whose shortest-unique form is the abbreviation itself.
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> JournalResult<Self> {
        Self::with_shortest_unique(name, abbreviation, None::<String>)
    }

    /// Creates a record with an explicit shortest-unique abbreviation.
    /// A blank `shortest_unique` falls back to `abbreviation`.
    pub fn with_shortest_unique(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        shortest_unique: Option<impl Into<String>>,
    ) -> JournalResult<Self> {
        let name = name.into().trim().to_string();
        let abbreviation = abbreviation.into().trim().to_string();
        if name.is_empty() {
            return Err(JournalError::InvalidAbbreviation(format!(
                "empty name for {abbreviation:?}"
            )));
        }
        if abbreviation.is_empty() {
            return Err(JournalError::InvalidAbbreviation(format!(
                "empty abbreviation for {name:?}"
            )));
        }

        let shortest_unique_abbreviation = shortest_unique
            .map(|s| s.into().trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| abbreviation.clone());
        let medline_abbreviation = medline_form(&abbreviation);

        Ok(Self {
            name,
            abbreviation,
            medline_abbreviation,
            shortest_unique_abbreviation,
        })
    }

    /// The full journal name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    pub fn medline_abbreviation(&self) -> &str {
        &self.medline_abbreviation
    }

    pub fn shortest_unique_abbreviation(&self) -> &str {
        &self.shortest_unique_abbreviation
    }

    /// Returns the variant selected by `abbreviation_type`.
    pub fn variant(&self, abbreviation_type: AbbreviationType) -> &str {
        match abbreviation_type {
            AbbreviationType::Default => self.abbreviation(),
            AbbreviationType::Medline => self.medline_abbreviation(),
            AbbreviationType::ShortestUnique => self.shortest_unique_abbreviation(),
        }
    }

    /// Iterates over all abbreviated forms (default, Medline, shortest-unique).
    pub(crate) fn abbreviated_forms(&self) -> [&str; 3] {
        [
            &self.abbreviation,
            &self.medline_abbreviation,
            &self.shortest_unique_abbreviation,
        ]
    }
}

/// Drops the dots of an abbreviation: `J. Chem. Phys.` becomes `J Chem Phys`.
fn medline_form(abbreviation: &str) -> String {
    let dotless = abbreviation
        .replace('.', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if dotless.is_empty() {
        abbreviation.to_string()
    } else {
        dotless
    }
}

/// Serialized shape: the Medline form is always derived, never stored.
#[derive(Serialize, Deserialize)]
struct RawAbbreviation {
    name: String,
    abbreviation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    shortest_unique_abbreviation: Option<String>,
}

impl TryFrom<RawAbbreviation> for Abbreviation {
    type Error = JournalError;

    fn try_from(raw: RawAbbreviation) -> JournalResult<Self> {
        Self::with_shortest_unique(
            raw.name,
            raw.abbreviation,
            raw.shortest_unique_abbreviation,
        )
    }
}

impl From<Abbreviation> for RawAbbreviation {
    fn from(a: Abbreviation) -> Self {
        let shortest_unique_abbreviation = (a.shortest_unique_abbreviation != a.abbreviation)
            .then_some(a.shortest_unique_abbreviation);
        Self {
            name: a.name,
            abbreviation: a.abbreviation,
            shortest_unique_abbreviation,
        }
    }
}
