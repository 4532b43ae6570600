use crate::{BibEntry, EditRecord, EditSink, ModelResult};
use serde::{Deserialize, Serialize};

/// A labelled, ordered compound of edits that is undone and redone as a unit.
///
/// A group may hold edits for several entries; `undo`/`redo` only touch the
/// records that belong to the entry passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditGroup {
    label: String,
    edits: Vec<EditRecord>,
}

impl EditGroup {
    /// Creates an empty group, e.g. `EditGroup::new("Abbreviate journal names")`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edits: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn edits(&self) -> &[EditRecord] {
        &self.edits
    }

    pub fn into_edits(self) -> Vec<EditRecord> {
        self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Returns true if at least one edit was recorded.
    pub fn has_edits(&self) -> bool {
        !self.is_empty()
    }

    /// Undoes this entry's edits, newest first. Returns how many were applied.
    pub fn undo(&self, entry: &mut BibEntry) -> ModelResult<usize> {
        let id = entry.id;
        let mut applied = 0;
        for record in self.edits.iter().rev().filter(|r| r.entry_id == id) {
            record.undo(entry)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Redoes this entry's edits, oldest first. Returns how many were applied.
    pub fn redo(&self, entry: &mut BibEntry) -> ModelResult<usize> {
        let id = entry.id;
        let mut applied = 0;
        for record in self.edits.iter().filter(|r| r.entry_id == id) {
            record.redo(entry)?;
            applied += 1;
        }
        Ok(applied)
    }
}

impl EditSink for EditGroup {
    fn add_edit(&mut self, record: EditRecord) {
        self.edits.push(record);
    }
}
