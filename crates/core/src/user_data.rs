//! User-supplied commit metadata
//!
//! This module defines the key/value mapping carried by a commit:
//! - [`UserData`]: frozen, read-only mapping of string keys to optional strings
//! - [`UserDataBuilder`]: mutable staging area used to assemble a [`UserData`]
//!
//! ## Ordering
//!
//! Entries keep the order in which each key was first inserted. That order is
//! fixed when the builder is frozen and is the single traversal used by every
//! consumer (binary encoding, structured rendering, serde), which makes the
//! encoded form of a given value byte-for-byte reproducible.
//!
//! Order carries no meaning for reads: two mappings holding the same keys with
//! the same values compare equal regardless of order.

use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Immutable mapping of commit metadata
///
/// A value may be absent (`None`), which is distinct from the empty string.
/// Keys are unique. There is no way to mutate a `UserData` once built; new
/// metadata means building a new value.
///
/// # Examples
///
/// ```
/// use commit_stats_core::UserData;
///
/// let data = UserData::builder()
///     .with("sync_id", Some("abc"))
///     .with("history_uuid", None::<&str>)
///     .build();
///
/// assert_eq!(data.get("sync_id"), Some(Some("abc")));
/// assert_eq!(data.get("history_uuid"), Some(None));
/// assert_eq!(data.get("missing"), None);
/// ```
// IndexMap equality ignores order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserData {
    entries: IndexMap<String, Option<String>>,
}

impl UserData {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a mapping
    pub fn builder() -> UserDataBuilder {
        UserDataBuilder::new()
    }

    /// Copy entries out of any borrowed key/value source
    ///
    /// Every key and value is cloned; the result shares nothing with the
    /// source. Duplicate keys keep the position of their first occurrence and
    /// the value of their last.
    pub fn copy_from<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut builder = UserDataBuilder::new();
        for (key, value) in entries {
            builder.insert(key, value);
        }
        builder.build()
    }

    /// Look up a key
    ///
    /// Returns `None` when the key is missing, `Some(None)` when the key is
    /// present with an absent value.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(Option::as_deref)
    }

    /// Check whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in first-insertion order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    /// Iterate keys in first-insertion order
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> FromIterator<(&'a str, Option<&'a str>)> for UserData {
    fn from_iter<I: IntoIterator<Item = (&'a str, Option<&'a str>)>>(iter: I) -> Self {
        UserData::copy_from(iter)
    }
}

impl FromIterator<(String, Option<String>)> for UserData {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        let mut builder = UserDataBuilder::new();
        for (key, value) in iter {
            builder.insert_owned(key, value);
        }
        builder.build()
    }
}

/// Staging area for a [`UserData`]
///
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default)]
pub struct UserDataBuilder {
    entries: IndexMap<String, Option<String>>,
}

impl UserDataBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert or replace an entry
    pub fn insert<K, V>(&mut self, key: K, value: Option<V>) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert_owned(key.into(), value.map(Into::into))
    }

    /// Chaining form of [`insert`](Self::insert)
    pub fn with<K, V>(mut self, key: K, value: Option<V>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.insert(key, value);
        self
    }

    fn insert_owned(&mut self, key: String, value: Option<String>) -> &mut Self {
        // An existing key keeps its slot and takes the new value
        self.entries.insert(key, value);
        self
    }

    /// Number of distinct keys staged so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been staged
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze into an immutable mapping
    pub fn build(self) -> UserData {
        UserData {
            entries: self.entries,
        }
    }
}

impl Serialize for UserData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UserData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(UserDataVisitor)
    }
}

struct UserDataVisitor;

impl<'de> Visitor<'de> for UserDataVisitor {
    type Value = UserData;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of string keys to strings or null")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut builder = UserDataBuilder::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Option<String>>()? {
            builder.insert_owned(key, value);
        }
        Ok(builder.build())
    }
}
