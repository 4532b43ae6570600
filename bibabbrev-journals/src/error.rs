//! Error types for the journal abbreviation layer.

use thiserror::Error;

/// Result type for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;

/// Errors raised while building lookups, string tables or preferences.
///
/// Abbreviating an entry never fails: a missing field, an unknown name or an
/// unchanged result is reported as "nothing changed".
#[derive(Debug, Error)]
pub enum JournalError {
    /// An abbreviation record with an empty name or abbreviation.
    #[error("invalid abbreviation: {0}")]
    InvalidAbbreviation(String),

    /// A string label was defined twice (labels are case-insensitive).
    #[error("duplicate string label: {0}")]
    DuplicateStringLabel(String),

    /// A string label that cannot be referenced as `#label#`.
    #[error("invalid string label: {0:?}")]
    InvalidStringLabel(String),

    /// Preferences could not be parsed.
    #[error("invalid preferences: {0}")]
    Preferences(#[from] serde_json::Error),
}
