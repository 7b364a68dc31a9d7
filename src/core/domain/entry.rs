//! Entries and the fields used to create them.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::types::{PropertyKey, PropertyValue};

/// A named leaf secret owned by a group.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<PropertyKey, PropertyValue>,
}

impl Entry {
    /// Create an entry from the standard fields. Custom properties are
    /// attached separately through the store.
    pub fn new(title: &str, fields: &SecretFields) -> Self {
        let now = Utc::now();
        Self {
            title: title.to_string(),
            username: fields.username.clone(),
            password: fields.password.clone(),
            url: fields.url.clone(),
            created: now,
            modified: now,
            properties: BTreeMap::new(),
        }
    }

    /// Set one custom property, replacing any previous value.
    pub fn set_property(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
        self.modified = Utc::now();
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("title", &self.title)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("url", &self.url)
            .field("created", &self.created)
            .field("modified", &self.modified)
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Values to write into an entry.
///
/// Every field is optional; an absent field is simply not set on the new
/// entry. Property values supplied as JSON scalars are stringified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SecretFields {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(
        default,
        alias = "custom_properties",
        deserialize_with = "stringified_properties"
    )]
    pub properties: BTreeMap<PropertyKey, PropertyValue>,
}

impl SecretFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Parse fields from a JSON object such as
    /// `{"username": "john", "custom_properties": {"port": 5432}}`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Parse a JSON object of custom properties, stringifying the values.
    pub fn properties_from_json(
        json: &str,
    ) -> serde_json::Result<BTreeMap<PropertyKey, PropertyValue>> {
        let raw: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        Ok(stringify_all(raw))
    }
}

fn stringified_properties<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<PropertyKey, PropertyValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw.map(stringify_all).unwrap_or_default())
}

fn stringify_all(raw: BTreeMap<String, serde_json::Value>) -> BTreeMap<PropertyKey, PropertyValue> {
    raw.into_iter().map(|(k, v)| (k, stringify(v))).collect()
}

fn stringify(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
