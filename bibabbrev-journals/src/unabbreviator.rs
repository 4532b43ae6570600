use crate::{AbbreviationLookup, StringResolver};
use bibabbrev_model::{BibEntry, EditRecord, EditSink, Field};
use std::sync::Arc;
use tracing::debug;

/// Expands abbreviated journal names back to their full form.
///
/// If the entry still carries the full name in `fjournal`, that value wins
/// over the lookup and `fjournal` is cleared.
#[derive(Clone)]
pub struct UndoableUnabbreviator {
    lookup: Arc<dyn AbbreviationLookup>,
}

impl UndoableUnabbreviator {
    pub fn new(lookup: Arc<dyn AbbreviationLookup>) -> Self {
        Self { lookup }
    }

    /// Replaces an abbreviated journal name in `field` with the full name.
    ///
    /// Returns `true` if the entry changed; edits are appended to `sink`.
    pub fn unabbreviate(
        &self,
        strings: Option<&dyn StringResolver>,
        entry: &mut BibEntry,
        field: &Field,
        sink: &mut dyn EditSink,
    ) -> bool {
        let Some(original) = entry.get_field(field).map(str::to_string) else {
            return false;
        };

        if field.is_journal_name() && Self::restore_from_fjournal(entry, field, &original, sink) {
            return true;
        }

        let text = match strings {
            Some(resolver) => resolver.resolve_for_strings(&original),
            None => original.clone(),
        };

        if !self.lookup.is_known_name(&text) || !self.lookup.is_abbreviated_name(&text) {
            return false;
        }
        let Some(abbreviation) = self.lookup.get(&text) else {
            return false;
        };

        let full_name = abbreviation.name();
        if full_name == original {
            return false;
        }

        debug!(
            "Unabbreviating {} of entry {}: {:?} -> {:?}",
            field, entry.id, original, full_name
        );
        entry.set_field(field.clone(), full_name);
        sink.add_edit(EditRecord::set(entry, field.clone(), Some(original), full_name));
        true
    }

    fn restore_from_fjournal(
        entry: &mut BibEntry,
        field: &Field,
        original: &str,
        sink: &mut dyn EditSink,
    ) -> bool {
        let Some(full_name) = entry.clear_field(&Field::FJOURNAL) else {
            return false;
        };

        debug!("Restoring {} of entry {} from fjournal", field, entry.id);
        entry.set_field(field.clone(), full_name.clone());
        sink.add_edit(EditRecord::set(
            entry,
            field.clone(),
            Some(original.to_string()),
            full_name.clone(),
        ));
        sink.add_edit(EditRecord::new(entry, Field::FJOURNAL, Some(full_name), None));
        true
    }
}

impl std::fmt::Debug for UndoableUnabbreviator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoableUnabbreviator")
            .field("lookup", &"<lookup>")
            .finish()
    }
}
