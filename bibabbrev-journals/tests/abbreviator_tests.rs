mod common;

use bibabbrev_journals::{
    AbbreviationPreferences, AbbreviationType, StringResolver, StringTable, UndoableAbbreviator,
};
use bibabbrev_model::{BibEntry, EditGroup, EditRecord, Field};
use common::{CountingLookup, JCP, MapResolver, lookup};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

fn abbreviator(
    abbreviation_type: AbbreviationType,
    use_fjournal_field: bool,
) -> UndoableAbbreviator {
    UndoableAbbreviator::new(lookup(), abbreviation_type, use_fjournal_field)
}

fn article(field: Field, value: &str) -> BibEntry {
    BibEntry::new("article").with_field(field, value)
}

// ── No-op paths ──────────────────────────────────────────────────

#[test]
fn missing_field_is_noop_without_lookup() {
    let counting = Arc::new(CountingLookup::new());
    let engine = UndoableAbbreviator::new(counting.clone(), AbbreviationType::Default, true);
    let mut entry = BibEntry::new("article").with_field(Field::new("title"), "x");
    let before = entry.clone();
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(!engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry, before);
    assert!(sink.is_empty());
    assert_eq!(counting.queries(), 0);
}

#[test]
fn unknown_name_is_noop() {
    let engine = abbreviator(AbbreviationType::Default, true);
    let mut entry = article(Field::JOURNAL, "Journal of Unknown Results");
    let before = entry.clone();
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(!engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry, before);
    assert!(sink.is_empty());
}

#[test]
fn unknown_resolved_name_is_noop_even_if_resolution_changed_text() {
    let engine = abbreviator(AbbreviationType::Default, false);
    let resolver = MapResolver::single("#x#", "Journal of Unknown Results");
    let mut entry = article(Field::JOURNAL, "#x#");
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(!engine.abbreviate(Some(&resolver), &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry.get_field(&Field::JOURNAL), Some("#x#"));
    assert!(sink.is_empty());
}

#[test]
fn unchanged_result_is_noop() {
    let engine = abbreviator(AbbreviationType::Default, true);
    let mut entry = article(Field::JOURNAL, "Nature");
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(!engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert!(!entry.has_field(&Field::FJOURNAL));
    assert!(sink.is_empty());
}

// ── Variant selection ────────────────────────────────────────────

#[test]
fn each_type_writes_its_variant() {
    let cases = [
        (AbbreviationType::Default, "J. Chem. Phys."),
        (AbbreviationType::Medline, "J Chem Phys"),
        (AbbreviationType::ShortestUnique, "JCP"),
    ];
    for (abbreviation_type, expected) in cases {
        let engine = abbreviator(abbreviation_type, false);
        let mut entry = article(Field::JOURNAL, JCP);
        let mut sink: Vec<EditRecord> = Vec::new();

        assert!(engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
        assert_eq!(entry.get_field(&Field::JOURNAL), Some(expected));
        assert_eq!(
            sink,
            vec![EditRecord::set(&entry, Field::JOURNAL, Some(JCP.into()), expected)]
        );
    }
}

#[test]
fn abbreviation_can_be_switched_to_another_style() {
    let mut entry = article(Field::JOURNAL, "J. Chem. Phys.");
    let mut sink: Vec<EditRecord> = Vec::new();

    let engine = abbreviator(AbbreviationType::Medline, false);
    assert!(engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry.get_field(&Field::JOURNAL), Some("J Chem Phys"));
}

#[test]
fn preferences_configure_engine() {
    let prefs = AbbreviationPreferences {
        abbreviation_type: AbbreviationType::Medline,
        use_fjournal_field: true,
    };
    let engine = UndoableAbbreviator::from_preferences(lookup(), &prefs);
    assert_eq!(engine.abbreviation_type(), AbbreviationType::Medline);
    assert!(engine.uses_fjournal_field());
}

// ── Secondary field ──────────────────────────────────────────────

#[test]
fn journal_example_writes_fjournal_then_journal() {
    let engine = abbreviator(AbbreviationType::Default, true);
    let mut entry = article(Field::JOURNAL, JCP);
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry.get_field(&Field::JOURNAL), Some("J. Chem. Phys."));
    assert_eq!(entry.get_field(&Field::FJOURNAL), Some(JCP));
    assert_eq!(
        sink,
        vec![
            EditRecord::set(&entry, Field::FJOURNAL, None, JCP),
            EditRecord::set(&entry, Field::JOURNAL, Some(JCP.into()), "J. Chem. Phys."),
        ]
    );
}

#[test]
fn journaltitle_also_writes_fjournal() {
    let engine = abbreviator(AbbreviationType::Default, true);
    let mut entry = article(Field::JOURNALTITLE, JCP);
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(None, &mut entry, &Field::JOURNALTITLE, &mut sink));
    assert_eq!(entry.get_field(&Field::FJOURNAL), Some(JCP));
    let fields: Vec<&Field> = sink.iter().map(|r| &r.field).collect();
    assert_eq!(fields, vec![&Field::FJOURNAL, &Field::JOURNALTITLE]);
}

#[test]
fn other_fields_never_write_fjournal() {
    let engine = abbreviator(AbbreviationType::Default, true);
    let booktitle = Field::new("booktitle");
    let mut entry = article(booktitle.clone(), JCP);
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(None, &mut entry, &booktitle, &mut sink));
    assert_eq!(entry.get_field(&booktitle), Some("J. Chem. Phys."));
    assert!(!entry.has_field(&Field::FJOURNAL));
    assert_eq!(sink.len(), 1);
}

#[test]
fn fjournal_disabled_writes_only_primary() {
    let engine = abbreviator(AbbreviationType::Default, false);
    let mut entry = article(Field::JOURNAL, JCP);
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert!(!entry.has_field(&Field::FJOURNAL));
    assert_eq!(sink.len(), 1);
}

#[test]
fn existing_fjournal_is_overwritten_and_recorded_as_absent() {
    let engine = abbreviator(AbbreviationType::Default, true);
    let mut entry = article(Field::JOURNAL, JCP).with_field(Field::FJOURNAL, "Something else");
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry.get_field(&Field::FJOURNAL), Some(JCP));
    assert_eq!(sink[0].old_value, None);
}

#[test]
fn fjournal_holds_full_name_when_matched_by_abbreviation() {
    let engine = abbreviator(AbbreviationType::Medline, true);
    let mut entry = article(Field::JOURNAL, "J. Chem. Phys.");
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry.get_field(&Field::FJOURNAL), Some(JCP));
}

// ── String resolution ────────────────────────────────────────────

#[test]
fn resolution_happens_before_lookup() {
    let engine = abbreviator(AbbreviationType::Default, true);
    let resolver = MapResolver::single("JCP-macro", JCP);
    let mut entry = article(Field::JOURNAL, "JCP-macro");
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(Some(&resolver), &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry.get_field(&Field::JOURNAL), Some("J. Chem. Phys."));
    assert_eq!(entry.get_field(&Field::FJOURNAL), Some(JCP));
    assert_eq!(sink[1].old_value.as_deref(), Some("JCP-macro"));
}

#[test]
fn string_table_reference_is_expanded() {
    let engine = abbreviator(AbbreviationType::Default, false);
    let mut strings = StringTable::new();
    strings.add_string("jcp", JCP).unwrap();
    let mut entry = article(Field::JOURNAL, "#jcp#");
    let mut sink: Vec<EditRecord> = Vec::new();

    let resolver: &dyn StringResolver = &strings;
    assert!(engine.abbreviate(Some(resolver), &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry.get_field(&Field::JOURNAL), Some("J. Chem. Phys."));
}

#[test]
fn without_resolver_references_are_looked_up_verbatim() {
    let engine = abbreviator(AbbreviationType::Default, false);
    let mut entry = article(Field::JOURNAL, "#jcp#");
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(!engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
}

#[test]
fn reference_to_abbreviated_text_is_still_written_literally() {
    // The resolved text already equals the abbreviation, but the field shows
    // the reference, so the literal abbreviation replaces it.
    let engine = abbreviator(AbbreviationType::Default, true);
    let resolver = MapResolver::single("#jcpabbr#", "J. Chem. Phys.");
    let mut entry = article(Field::JOURNAL, "#jcpabbr#");
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(Some(&resolver), &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(entry.get_field(&Field::JOURNAL), Some("J. Chem. Phys."));
    assert_eq!(sink.len(), 2);
}

// ── Idempotence & undo ───────────────────────────────────────────

#[test]
fn second_call_is_noop() {
    let engine = abbreviator(AbbreviationType::Default, true);
    let mut entry = article(Field::JOURNAL, JCP);
    let mut sink: Vec<EditRecord> = Vec::new();

    assert!(engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert!(!engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
    assert_eq!(sink.len(), 2);
}

#[test]
fn edit_group_undoes_abbreviation() {
    let engine = abbreviator(AbbreviationType::ShortestUnique, true);
    let mut entry = article(Field::JOURNAL, JCP);
    let original = entry.clone();
    let mut group = EditGroup::new("Abbreviate journal names");

    assert!(engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut group));
    let abbreviated = entry.clone();

    assert_eq!(group.undo(&mut entry).unwrap(), 2);
    assert_eq!(entry, original);
    assert_eq!(group.redo(&mut entry).unwrap(), 2);
    assert_eq!(entry, abbreviated);
}

fn any_type() -> impl Strategy<Value = AbbreviationType> {
    prop_oneof![
        Just(AbbreviationType::Default),
        Just(AbbreviationType::Medline),
        Just(AbbreviationType::ShortestUnique),
    ]
}

fn any_journal() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(JCP),
        Just("Physical Review Letters"),
        Just("Nature"),
        Just("J. Chem. Phys."),
        Just("Unknown Journal"),
    ]
}

proptest! {
    #[test]
    fn abbreviate_twice_never_changes_twice(
        abbreviation_type in any_type(),
        use_fjournal in any::<bool>(),
        journal in any_journal(),
    ) {
        let engine = abbreviator(abbreviation_type, use_fjournal);
        let mut entry = article(Field::JOURNAL, journal);
        let mut sink: Vec<EditRecord> = Vec::new();

        engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink);
        let once = entry.clone();
        let edits = sink.len();
        prop_assert!(!engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
        prop_assert_eq!(&entry, &once);
        prop_assert_eq!(sink.len(), edits);
    }

    #[test]
    fn missing_field_never_changes_entry(
        abbreviation_type in any_type(),
        use_fjournal in any::<bool>(),
        title in "[a-zA-Z ]{0,30}",
    ) {
        let engine = abbreviator(abbreviation_type, use_fjournal);
        let mut entry = article(Field::new("title"), &title);
        let before = entry.clone();
        let mut sink: Vec<EditRecord> = Vec::new();

        prop_assert!(!engine.abbreviate(None, &mut entry, &Field::JOURNAL, &mut sink));
        prop_assert_eq!(&entry, &before);
        prop_assert!(sink.is_empty());
    }
}
