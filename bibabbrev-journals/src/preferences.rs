use crate::{AbbreviationType, JournalResult};
use serde::{Deserialize, Serialize};

/// User preferences that configure the abbreviation engines.
///
/// ```json
/// { "abbreviation_type": "medline", "use_fjournal_field": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AbbreviationPreferences {
    /// Which variant the abbreviator writes.
    pub abbreviation_type: AbbreviationType,
    /// Keep the full journal name in `fjournal` when abbreviating.
    pub use_fjournal_field: bool,
}

impl AbbreviationPreferences {
    pub fn from_json(json: &str) -> JournalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> JournalResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
