//! BibTeX `@String` macro resolution.
//!
//! A field may reference shared strings as `#label#`, for example `#jcp#`
//! or `#acs# Letters`. Resolution expands those references to literal text
//! before a journal name is looked up.

use crate::{JournalError, JournalResult};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Expands string references in raw field text.
pub trait StringResolver: Send + Sync {
    /// Returns `text` with every resolvable `#label#` reference expanded.
    fn resolve_for_strings(&self, text: &str) -> String;
}

/// Resolves `#label#` references against a table of `@String` definitions.
///
/// Labels match case-insensitively. Unknown labels are left as written, and
/// a circular definition stops expanding at the label that closes the cycle.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<String, StringDefinition>,
}

#[derive(Debug, Clone)]
struct StringDefinition {
    label: String,
    content: String,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `label` as `content`.
    pub fn add_string(
        &mut self,
        label: impl Into<String>,
        content: impl Into<String>,
    ) -> JournalResult<()> {
        let label = label.into();
        if label.is_empty() || label.contains('#') || label.chars().any(char::is_whitespace) {
            return Err(JournalError::InvalidStringLabel(label));
        }
        let key = label.to_lowercase();
        if self.strings.contains_key(&key) {
            return Err(JournalError::DuplicateStringLabel(label));
        }
        self.strings.insert(
            key,
            StringDefinition {
                label,
                content: content.into(),
            },
        );
        Ok(())
    }

    /// Returns the raw content of `label`, without expanding nested references.
    pub fn get_string(&self, label: &str) -> Option<&str> {
        self.strings.get(&label.to_lowercase()).map(|d| d.content.as_str())
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    fn resolve_content(&self, text: &str, in_progress: &mut HashSet<String>) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(start) = rest.find('#') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(len) = after.find('#') else {
                // Unterminated reference: copy the remainder verbatim.
                out.push_str(&rest[start..]);
                return out;
            };

            let label = &after[..len];
            match self.resolve_label(label, in_progress) {
                Some(resolved) => out.push_str(&resolved),
                None => {
                    out.push('#');
                    out.push_str(label);
                    out.push('#');
                }
            }
            rest = &after[len + 1..];
        }

        out.push_str(rest);
        out
    }

    fn resolve_label(&self, label: &str, in_progress: &mut HashSet<String>) -> Option<String> {
        let key = label.to_lowercase();
        let definition = self.strings.get(&key)?;

        if !in_progress.insert(key.clone()) {
            warn!(
                "Stopped resolving string {:?}: circular reference",
                definition.label
            );
            return Some(label.to_string());
        }
        let resolved = self.resolve_content(&definition.content, in_progress);
        in_progress.remove(&key);
        Some(resolved)
    }
}

impl StringResolver for StringTable {
    fn resolve_for_strings(&self, text: &str) -> String {
        if !text.contains('#') {
            return text.to_string();
        }
        self.resolve_content(text, &mut HashSet::new())
    }
}
