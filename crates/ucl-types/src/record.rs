use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RecordError, RecordResult};

/// A stored user record.
///
/// The identifier is expected to be unique per record, but nothing here
/// enforces it: uniqueness follows only from callers choosing distinct
/// storage keys. The associated identifiers keep insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Record {
    /// The user's identifier.
    pub identifier: String,
    /// Identifiers this user has granted access to, in insertion order.
    pub associated_identifiers: Vec<String>,
}

impl Record {
    /// Create a record from its two fields.
    pub fn new(identifier: impl Into<String>, associated_identifiers: Vec<String>) -> Self {
        Self {
            identifier: identifier.into(),
            associated_identifiers,
        }
    }

    /// A record with no associated identifiers.
    pub fn seed(identifier: impl Into<String>) -> Self {
        Self::new(identifier, Vec::new())
    }

    /// Encode to the canonical wire bytes.
    pub fn to_bytes(&self) -> RecordResult<Vec<u8>> {
        serialize(self)
    }

    /// Decode from wire bytes.
    pub fn from_bytes(bytes: &[u8]) -> RecordResult<Self> {
        deserialize(bytes)
    }

    /// Interpret a single positional argument as a list of associated
    /// identifiers.
    ///
    /// A JSON array of strings is taken as-is, an empty argument yields an
    /// empty list, and any other text becomes a one-element list.
    pub fn parse_associated(arg: &str) -> Vec<String> {
        if arg.is_empty() {
            return Vec::new();
        }
        match serde_json::from_str::<Vec<String>>(arg) {
            Ok(list) => list,
            Err(_) => vec![arg.to_string()],
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}]",
            self.identifier,
            self.associated_identifiers.join(", ")
        )
    }
}

/// Encode a record as compact JSON.
pub fn serialize(record: &Record) -> RecordResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(|e| RecordError::Serialization(e.to_string()))
}

/// Decode a record, rejecting anything that is not exactly the two-field shape.
pub fn deserialize(bytes: &[u8]) -> RecordResult<Record> {
    if bytes.is_empty() {
        return Err(RecordError::Malformed("empty payload".into()));
    }
    serde_json::from_slice(bytes).map_err(|e| RecordError::Malformed(e.to_string()))
}
