//! Key types
//!
//! This module defines the addressing types used throughout the system:
//! - [`Key`]: composite (partition key, sort key) address of an item
//! - [`KeySchema`]: which item attributes make up the key

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default partition key attribute name
pub const DEFAULT_PARTITION_KEY: &str = "pk";

/// Default sort key attribute name
pub const DEFAULT_SORT_KEY: &str = "sk";

/// Composite key of an item
///
/// Two keys are equal iff both components are equal. Keys are immutable once
/// constructed.
///
/// Keys are ordered lexicographically: partition key → sort key
///
/// # Examples
///
/// ```
/// use condkv_core::Key;
///
/// let key = Key::new("1", "2");
/// assert_eq!(key.partition_key(), "1");
/// assert_eq!(key.sort_key(), "2");
/// assert_ne!(key, Key::new("2", "1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Key {
    partition_key: String,
    sort_key: String,
}

impl Key {
    /// Create a new key
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key: sort_key.into(),
        }
    }

    /// Partition (HASH) component
    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    /// Sort (RANGE) component
    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }
}

impl std::fmt::Display for Key {
    /// Display key in the format: (partition_key, sort_key)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.partition_key, self.sort_key)
    }
}

/// Names of the attributes that form an item's key
///
/// Equivalent to a table declaration with one HASH and one RANGE attribute,
/// both string typed.
///
/// # Examples
///
/// ```
/// use condkv_core::KeySchema;
///
/// let schema = KeySchema::default();
/// assert_eq!(schema.partition_key, "pk");
/// assert_eq!(schema.sort_key, "sk");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeySchema {
    /// Partition key attribute name
    pub partition_key: String,
    /// Sort key attribute name
    pub sort_key: String,
}

impl KeySchema {
    /// Create a schema from attribute names
    pub fn new(partition_key: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            partition_key: partition_key.into(),
            sort_key: sort_key.into(),
        }
    }

    /// Reject empty or identical attribute names
    pub fn validate(&self) -> Result<()> {
        if self.partition_key.is_empty() {
            return Err(Error::InvalidSchema(
                "partition key attribute name is empty".to_string(),
            ));
        }
        if self.sort_key.is_empty() {
            return Err(Error::InvalidSchema(
                "sort key attribute name is empty".to_string(),
            ));
        }
        if self.partition_key == self.sort_key {
            return Err(Error::InvalidSchema(format!(
                "partition and sort key share the name {}",
                self.partition_key
            )));
        }
        Ok(())
    }
}

impl Default for KeySchema {
    fn default() -> Self {
        Self::new(DEFAULT_PARTITION_KEY, DEFAULT_SORT_KEY)
    }
}
