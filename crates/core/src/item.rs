//! Items
//!
//! An [`Item`] maps attribute names to opaque [`Value`]s. Stored items always
//! carry their key attributes; [`Item::key`] derives the composite [`Key`]
//! from them under a given [`KeySchema`].

use crate::error::{Error, Result};
use crate::types::{Key, KeySchema};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single item: attribute name → value
///
/// # Examples
///
/// ```
/// use condkv_core::{Item, Key, KeySchema};
///
/// let item = Item::new()
///     .with("pk", "123")
///     .with("sk", "abc")
///     .with("attribute", "value");
///
/// assert!(item.contains("attribute"));
/// assert_eq!(item.key(&KeySchema::default()).unwrap(), Key::new("123", "abc"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    attributes: BTreeMap<String, Value>,
}

impl Item {
    /// Create an empty item
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute insertion
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or overwrite an attribute, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Get an attribute value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Check whether the attribute is present, whatever its value
    ///
    /// A present attribute holding `Value::Null` still counts as present.
    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Check if the item has no attributes
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute names in sorted order
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Derive the composite key from this item's key attributes
    ///
    /// # Errors
    ///
    /// * `MissingKeyAttribute` - a key attribute is absent
    /// * `InvalidKeyAttribute` - a key attribute is not a `Value::String`
    pub fn key(&self, schema: &KeySchema) -> Result<Key> {
        let partition_key = self.key_component(&schema.partition_key)?;
        let sort_key = self.key_component(&schema.sort_key)?;
        Ok(Key::new(partition_key, sort_key))
    }

    fn key_component(&self, attribute: &str) -> Result<&str> {
        let value = self
            .get(attribute)
            .ok_or_else(|| Error::MissingKeyAttribute {
                attribute: attribute.to_string(),
            })?;
        value.as_str().ok_or_else(|| Error::InvalidKeyAttribute {
            attribute: attribute.to_string(),
            actual: value.type_name(),
        })
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Item {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Item {
    fn from(object: serde_json::Map<String, serde_json::Value>) -> Self {
        object.into_iter().collect()
    }
}
