#![allow(dead_code)]

use bibabbrev_journals::{
    Abbreviation, AbbreviationLookup, JournalAbbreviationRepository, StringResolver,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const JCP: &str = "Journal of Chemical Physics";

/// A repository with a journal whose three variants all differ.
pub fn repository() -> JournalAbbreviationRepository {
    [
        Abbreviation::with_shortest_unique(JCP, "J. Chem. Phys.", Some("JCP")).unwrap(),
        Abbreviation::new("Physical Review Letters", "Phys. Rev. Lett.").unwrap(),
        Abbreviation::new("Nature", "Nature").unwrap(),
    ]
    .into_iter()
    .collect()
}

pub fn lookup() -> Arc<dyn AbbreviationLookup> {
    Arc::new(repository())
}

/// Lookup wrapper that counts how often it is queried.
pub struct CountingLookup {
    pub inner: JournalAbbreviationRepository,
    pub queries: AtomicUsize,
}

impl CountingLookup {
    pub fn new() -> Self {
        Self { inner: repository(), queries: AtomicUsize::new(0) }
    }

    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl AbbreviationLookup for CountingLookup {
    fn get(&self, name: &str) -> Option<&Abbreviation> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.get(name)
    }

    fn is_known_name(&self, name: &str) -> bool {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.inner.is_known_name(name)
    }
}

/// Resolver that maps whole field texts to replacements.
pub struct MapResolver(pub HashMap<String, String>);

impl MapResolver {
    pub fn single(raw: &str, resolved: &str) -> Self {
        Self(HashMap::from([(raw.to_string(), resolved.to_string())]))
    }
}

impl StringResolver for MapResolver {
    fn resolve_for_strings(&self, text: &str) -> String {
        self.0.get(text).cloned().unwrap_or_else(|| text.to_string())
    }
}
