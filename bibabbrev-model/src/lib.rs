//! Bibliographic entry model for bibabbrev.
//!
//! Defines the types that the abbreviation engine mutates and records:
//! - [`BibEntry`] — a single record, a map from [`Field`] to text
//! - [`EditRecord`] — one reversible field mutation
//! - [`EditSink`] — where engines append the records they produce
//! - [`EditGroup`] — a caller-owned, labelled compound of edits with undo/redo
//!
//! Engines never retain entries or records beyond a call; ownership stays
//! with the caller.

mod edit;
mod entry;
mod group;

pub use bibabbrev_types::{EntryId, Field};
pub use edit::{EditRecord, EditSink};
pub use entry::BibEntry;
pub use group::EditGroup;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur when replaying edits.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("edit for entry {expected} applied to entry {actual}")]
    EntryMismatch {
        expected: EntryId,
        actual: EntryId,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
