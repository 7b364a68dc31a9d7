//! The externally visible shape of a secret.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::core::constants::{PASSWORD_KEY, USERNAME_KEY};
use crate::core::domain::Entry;

/// One entry rendered as `{name: {username?, password?, ...properties}}`.
///
/// `username` and `password` are only present when the entry field is
/// non-empty. A custom property with the same name takes precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretRecord {
    name: String,
    fields: BTreeMap<String, String>,
}

impl SecretRecord {
    /// Snapshot an entry under the given terminal path segment.
    pub fn from_entry(name: &str, entry: &Entry) -> Self {
        let mut fields = BTreeMap::new();

        let standard = [
            (USERNAME_KEY, &entry.username),
            (PASSWORD_KEY, &entry.password),
        ];
        for (key, value) in standard {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                fields.insert(key.to_string(), value.to_string());
            }
        }

        fields.extend(
            entry
                .properties
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );

        Self {
            name: name.to_string(),
            fields,
        }
    }

    /// The record key, i.e. the entry's terminal path segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

impl Serialize for SecretRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.fields)?;
        map.end()
    }
}

/// Result of a single-secret read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretLookup {
    Found(SecretRecord),
    Absent,
}

impl SecretLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, SecretLookup::Found(_))
    }

    pub fn record(&self) -> Option<&SecretRecord> {
        match self {
            SecretLookup::Found(record) => Some(record),
            SecretLookup::Absent => None,
        }
    }

    pub fn into_record(self) -> Option<SecretRecord> {
        match self {
            SecretLookup::Found(record) => Some(record),
            SecretLookup::Absent => None,
        }
    }
}

/// `Absent` serializes as an empty mapping.
impl Serialize for SecretLookup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SecretLookup::Found(record) => record.serialize(serializer),
            SecretLookup::Absent => serializer.serialize_map(Some(0))?.end(),
        }
    }
}
