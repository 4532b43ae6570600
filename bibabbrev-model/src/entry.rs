use crate::{EntryId, Field, ModelResult};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single bibliographic record.
///
/// Field values are plain text exactly as the user sees them; string
/// references such as `#jcp#` are kept unresolved.
///
/// Deserialization rejects field names that collide once lowercased, such as
/// `Journal` and `journal` in the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibEntry {
    pub id: EntryId,
    pub entry_type: String,
    #[serde(default, deserialize_with = "deserialize_fields")]
    fields: BTreeMap<Field, String>,
}

impl BibEntry {
    /// Creates an empty entry of the given type (e.g. "article").
    pub fn new(entry_type: impl Into<String>) -> Self {
        Self::with_id(EntryId::new(), entry_type)
    }

    /// Creates an empty entry with a known id.
    pub fn with_id(id: EntryId, entry_type: impl Into<String>) -> Self {
        Self {
            id,
            entry_type: entry_type.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter.
    #[must_use]
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    pub fn has_field(&self, field: &Field) -> bool {
        self.fields.contains_key(field)
    }

    pub fn get_field(&self, field: &Field) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Sets a field, returning its previous value.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Option<String> {
        self.fields.insert(field, value.into())
    }

    /// Removes a field, returning its previous value.
    pub fn clear_field(&mut self, field: &Field) -> Option<String> {
        self.fields.remove(field)
    }

    /// Iterates over fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&Field, &str)> {
        self.fields.iter().map(|(f, v)| (f, v.as_str()))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Serializes the entry to JSON.
    pub fn to_json(&self) -> ModelResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserializes an entry from JSON.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn deserialize_fields<'de, D>(deserializer: D) -> Result<BTreeMap<Field, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldsVisitor;

    impl<'de> Visitor<'de> for FieldsVisitor {
        type Value = BTreeMap<Field, String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of field names to text")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut fields = BTreeMap::new();
            while let Some((name, value)) = map.next_entry::<String, String>()? {
                let field = Field::new(name.as_str());
                if fields.contains_key(&field) {
                    return Err(serde::de::Error::custom(format!("duplicate field {name:?}")));
                }
                fields.insert(field, value);
            }
            Ok(fields)
        }
    }

    deserializer.deserialize_map(FieldsVisitor)
}
