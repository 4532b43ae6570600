//! Known journal names and their abbreviations.

use crate::Abbreviation;
use std::collections::HashMap;
use tracing::debug;

/// Read-only oracle the engines query for journal names.
///
/// Implementations must be safe to share between threads; the engines never
/// lock around queries.
pub trait AbbreviationLookup: Send + Sync {
    /// Returns the record for `name`, matched as a full name or as any of its
    /// abbreviated forms.
    fn get(&self, name: &str) -> Option<&Abbreviation>;

    /// Returns true if `name` is a full name or an abbreviation of a known journal.
    fn is_known_name(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns true if `name` is an abbreviated form rather than a full name.
    fn is_abbreviated_name(&self, name: &str) -> bool {
        self.get(name).is_some_and(|a| a.name() != name.trim())
    }
}

/// In-memory lookup over a list of [`Abbreviation`] records.
///
/// Names are matched after trimming and reading the LaTeX escape `\&` as `&`.
/// Full names take precedence over default abbreviations, which take
/// precedence over Medline and then shortest-unique forms.
#[derive(Debug, Clone, Default)]
pub struct JournalAbbreviationRepository {
    abbreviations: Vec<Abbreviation>,
    by_name: HashMap<String, usize>,
    by_abbreviation: HashMap<String, usize>,
    by_medline: HashMap<String, usize>,
    by_shortest_unique: HashMap<String, usize>,
}

impl JournalAbbreviationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record. A record with the same full name replaces the old one.
    pub fn add(&mut self, abbreviation: Abbreviation) {
        let key = normalize(abbreviation.name());
        match self.by_name.get(&key) {
            Some(&index) => {
                debug!("Replacing abbreviation for {:?}", abbreviation.name());
                self.abbreviations[index] = abbreviation;
                self.reindex();
            }
            None => {
                let index = self.abbreviations.len();
                self.index(&abbreviation, index);
                self.abbreviations.push(abbreviation);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }

    /// All records in insertion order.
    pub fn abbreviations(&self) -> &[Abbreviation] {
        &self.abbreviations
    }

    fn index(&mut self, abbreviation: &Abbreviation, index: usize) {
        self.by_name.insert(normalize(abbreviation.name()), index);
        self.by_abbreviation
            .entry(normalize(abbreviation.abbreviation()))
            .or_insert(index);
        self.by_medline
            .entry(normalize(abbreviation.medline_abbreviation()))
            .or_insert(index);
        self.by_shortest_unique
            .entry(normalize(abbreviation.shortest_unique_abbreviation()))
            .or_insert(index);
    }

    fn reindex(&mut self) {
        self.by_name.clear();
        self.by_abbreviation.clear();
        self.by_medline.clear();
        self.by_shortest_unique.clear();
        let abbreviations = std::mem::take(&mut self.abbreviations);
        for (index, abbreviation) in abbreviations.iter().enumerate() {
            self.index(abbreviation, index);
        }
        self.abbreviations = abbreviations;
    }
}

impl AbbreviationLookup for JournalAbbreviationRepository {
    fn get(&self, name: &str) -> Option<&Abbreviation> {
        let key = normalize(name);
        [
            &self.by_name,
            &self.by_abbreviation,
            &self.by_medline,
            &self.by_shortest_unique,
        ]
        .into_iter()
        .find_map(|map| map.get(&key))
        .map(|&index| &self.abbreviations[index])
    }

    fn is_abbreviated_name(&self, name: &str) -> bool {
        let key = normalize(name);
        !self.by_name.contains_key(&key)
            && (self.by_abbreviation.contains_key(&key)
                || self.by_medline.contains_key(&key)
                || self.by_shortest_unique.contains_key(&key))
    }
}

impl Extend<Abbreviation> for JournalAbbreviationRepository {
    fn extend<I: IntoIterator<Item = Abbreviation>>(&mut self, iter: I) {
        for abbreviation in iter {
            self.add(abbreviation);
        }
    }
}

impl FromIterator<Abbreviation> for JournalAbbreviationRepository {
    fn from_iter<I: IntoIterator<Item = Abbreviation>>(iter: I) -> Self {
        let mut repository = Self::new();
        repository.extend(iter);
        repository
    }
}

fn normalize(name: &str) -> String {
    name.trim().replace("\\&", "&")
}
