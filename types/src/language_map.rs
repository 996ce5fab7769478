//! Localized text keyed by language tag.

use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::DocumentError;
use crate::attrs::{self, Fields};

/// Language tag (`"en-US"`) to localized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageMap(BTreeMap<String, String>);

impl LanguageMap {
    const TYPE_NAME: &'static str = "LanguageMap";

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object whose values must all be strings.
    pub fn from_map(fields: Fields) -> Result<Self, DocumentError> {
        let mut entries = BTreeMap::new();
        for (tag, text) in fields {
            match text {
                Value::String(text) => {
                    entries.insert(tag, text);
                }
                other => {
                    return Err(DocumentError::invalid_value(
                        Self::TYPE_NAME,
                        tag,
                        format!("expected a string, found {other}"),
                    ));
                }
            }
        }
        Ok(Self(entries))
    }

    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        Self::from_map(attrs::expect_object(Self::TYPE_NAME, value)?)
    }

    /// Insert a translation, returning the one it replaced.
    pub fn insert(&mut self, tag: impl Into<String>, text: impl Into<String>) -> Option<String> {
        self.0.insert(tag.into(), text.into())
    }

    pub fn remove(&mut self, tag: &str) -> Option<String> {
        self.0.remove(tag)
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.0.get(tag).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LanguageMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(tag, text)| (tag.into(), text.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a LanguageMap {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Fields> for LanguageMap {
    type Error = DocumentError;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        Self::from_map(fields)
    }
}

impl<'de> Deserialize<'de> for LanguageMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Fields::deserialize(deserializer)?;
        Self::from_map(fields).map_err(D::Error::custom)
    }
}

/// A language map as supplied by a caller: typed, or a raw JSON object.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageMapInput {
    Map(LanguageMap),
    Fields(Fields),
}

impl LanguageMapInput {
    pub fn resolve(self) -> Result<LanguageMap, DocumentError> {
        match self {
            Self::Map(map) => Ok(map),
            Self::Fields(fields) => LanguageMap::from_map(fields),
        }
    }
}

impl From<LanguageMap> for LanguageMapInput {
    fn from(value: LanguageMap) -> Self {
        Self::Map(value)
    }
}

impl From<Fields> for LanguageMapInput {
    fn from(value: Fields) -> Self {
        Self::Fields(value)
    }
}
