//! A single character record.
//!
//! Records are kept as raw JSON objects so that fields the service does
//! not know about are passed through untouched. Only `id`, `name` and
//! `featured` are interpreted, through the accessors below.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One character as it appears in the data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterRecord(Map<String, Value>);

impl CharacterRecord {
    /// The numeric identifier, if the record carries a JSON integer `id`.
    ///
    /// Strings, floats and booleans never count as an id.
    pub fn id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    /// The display name. Missing or non-string names read as `""`.
    pub fn name(&self) -> &str {
        self.0.get("name").and_then(Value::as_str).unwrap_or_default()
    }

    /// Whether the record is marked `"featured": true`.
    pub fn is_featured(&self) -> bool {
        matches!(self.0.get("featured"), Some(Value::Bool(true)))
    }

    /// Look up any field, interpreted or not.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}
