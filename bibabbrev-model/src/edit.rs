//! Reversible field edits.
//!
//! An [`EditRecord`] describes exactly one field mutation on one entry.
//! Records are plain values: engines hand them to an [`EditSink`] and the
//! caller decides how to group, store and replay them.

use crate::{BibEntry, EntryId, Field, ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One field mutation: the field went from `old_value` to `new_value`.
///
/// `None` on either side means the field was absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditRecord {
    /// The entry this edit applies to.
    pub entry_id: EntryId,

    /// The changed field.
    pub field: Field,

    /// Value before the edit, or `None` if the field was not recorded as set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,

    /// Value after the edit, or `None` if the field was cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
}

impl EditRecord {
    #[must_use]
    pub fn new(
        entry: &BibEntry,
        field: Field,
        old_value: Option<String>,
        new_value: Option<String>,
    ) -> Self {
        Self {
            entry_id: entry.id,
            field,
            old_value,
            new_value,
        }
    }

    /// Shorthand for an edit that sets `field` to `new_value`.
    #[must_use]
    pub fn set(
        entry: &BibEntry,
        field: Field,
        old_value: Option<String>,
        new_value: impl Into<String>,
    ) -> Self {
        Self::new(entry, field, old_value, Some(new_value.into()))
    }

    /// Restores the old value on `entry`.
    pub fn undo(&self, entry: &mut BibEntry) -> ModelResult<()> {
        self.check_entry(entry)?;
        debug!("Undoing edit of {} on entry {}", self.field, self.entry_id);
        Self::apply(entry, &self.field, self.old_value.as_deref());
        Ok(())
    }

    /// Re-applies the new value on `entry`.
    pub fn redo(&self, entry: &mut BibEntry) -> ModelResult<()> {
        self.check_entry(entry)?;
        debug!("Redoing edit of {} on entry {}", self.field, self.entry_id);
        Self::apply(entry, &self.field, self.new_value.as_deref());
        Ok(())
    }

    fn check_entry(&self, entry: &BibEntry) -> ModelResult<()> {
        if entry.id != self.entry_id {
            return Err(ModelError::EntryMismatch {
                expected: self.entry_id,
                actual: entry.id,
            });
        }
        Ok(())
    }

    fn apply(entry: &mut BibEntry, field: &Field, value: Option<&str>) {
        match value {
            Some(v) => {
                entry.set_field(field.clone(), v);
            }
            None => {
                entry.clear_field(field);
            }
        }
    }
}

/// Append-only receiver of edit records.
pub trait EditSink {
    fn add_edit(&mut self, record: EditRecord);
}

impl EditSink for Vec<EditRecord> {
    fn add_edit(&mut self, record: EditRecord) {
        self.push(record);
    }
}
