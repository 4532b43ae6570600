use crate::{AbbreviationLookup, AbbreviationPreferences, AbbreviationType, StringResolver};
use bibabbrev_model::{BibEntry, EditRecord, EditSink, Field};
use std::sync::Arc;
use tracing::debug;

/// Replaces known full journal names with an abbreviation and records the
/// change as undoable edits.
///
/// Configuration is fixed at construction; each call is independent.
#[derive(Clone)]
pub struct UndoableAbbreviator {
    lookup: Arc<dyn AbbreviationLookup>,
    abbreviation_type: AbbreviationType,
    use_fjournal_field: bool,
}

impl UndoableAbbreviator {
    pub fn new(
        lookup: Arc<dyn AbbreviationLookup>,
        abbreviation_type: AbbreviationType,
        use_fjournal_field: bool,
    ) -> Self {
        Self {
            lookup,
            abbreviation_type,
            use_fjournal_field,
        }
    }

    pub fn from_preferences(
        lookup: Arc<dyn AbbreviationLookup>,
        preferences: &AbbreviationPreferences,
    ) -> Self {
        Self::new(
            lookup,
            preferences.abbreviation_type,
            preferences.use_fjournal_field,
        )
    }

    pub fn abbreviation_type(&self) -> AbbreviationType {
        self.abbreviation_type
    }

    pub fn uses_fjournal_field(&self) -> bool {
        self.use_fjournal_field
    }

    /// Abbreviates the journal name held in `field` of `entry`.
    ///
    /// `strings` expands `#label#` references before the lookup; without it
    /// the field text is looked up as written. When the entry changes, the
    /// edits are appended to `sink` (`fjournal` first, then `field`) and
    /// `true` is returned. A missing field, an unknown name, or a result equal
    /// to the current field text leaves the entry untouched and returns `false`.
    pub fn abbreviate(
        &self,
        strings: Option<&dyn StringResolver>,
        entry: &mut BibEntry,
        field: &Field,
        sink: &mut dyn EditSink,
    ) -> bool {
        let Some(original) = entry.get_field(field).map(str::to_string) else {
            return false;
        };

        let text = match strings {
            Some(resolver) => resolver.resolve_for_strings(&original),
            None => original.clone(),
        };

        if !self.lookup.is_known_name(&text) {
            debug!("Unknown journal {:?} in entry {}", text, entry.id);
            return false;
        }
        let Some(abbreviation) = self.lookup.get(&text) else {
            return false;
        };

        let new_text = abbreviation.variant(self.abbreviation_type);
        // Compared against what the field shows, not the resolved text.
        if new_text == original {
            return false;
        }

        if self.use_fjournal_field && field.is_journal_name() {
            let full_name = abbreviation.name().to_string();
            entry.set_field(Field::FJOURNAL, full_name.clone());
            sink.add_edit(EditRecord::set(entry, Field::FJOURNAL, None, full_name));
        }

        debug!(
            "Abbreviating {} of entry {}: {:?} -> {:?}",
            field, entry.id, original, new_text
        );
        entry.set_field(field.clone(), new_text);
        sink.add_edit(EditRecord::set(entry, field.clone(), Some(original), new_text));
        true
    }
}

impl std::fmt::Debug for UndoableAbbreviator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoableAbbreviator")
            .field("lookup", &"<lookup>")
            .field("abbreviation_type", &self.abbreviation_type)
            .field("use_fjournal_field", &self.use_fjournal_field)
            .finish()
    }
}
