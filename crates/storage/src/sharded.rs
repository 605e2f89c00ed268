//! Sharded item storage
//!
//! DashMap keyed by partition key, FxHashMap by sort key within.
//! Lock-free reads, writes lock only the target partition.
//!
//! # Design
//!
//! - DashMap: 16-way sharded by default, lock-free reads
//! - FxHashMap: O(1) lookups, fast non-crypto hash
//! - Per-partition: items in different partitions never contend
//!
//! The store has no notion of conditions. It exposes unconditional
//! primitives only; conditional semantics live in the engine.

use condkv_core::{Item, Key};
use dashmap::DashMap;
use rustc_hash::FxHashMap;

// All items sharing one partition key, addressed by sort key
#[derive(Debug, Default)]
pub(crate) struct Partition {
    items: FxHashMap<String, Item>,
}

impl Partition {
    fn len(&self) -> usize {
        self.items.len()
    }
}

/// In-memory item store keyed by composite [`Key`]
///
/// At most one item exists per key.
///
/// # Thread Safety
///
/// All operations are thread-safe:
/// - get(): Lock-free read via DashMap
/// - set(): Only locks the target partition
///
/// Atomicity across a get followed by a set is NOT provided here; callers
/// that need read-evaluate-write must serialize themselves.
///
/// # Example
///
/// ```
/// use condkv_core::{Item, Key};
/// use condkv_storage::ItemStore;
///
/// let store = ItemStore::new();
/// let key = Key::new("1", "1");
/// store.set(key.clone(), Item::new().with("pk", "1").with("sk", "1"));
/// assert!(store.contains(&key));
/// ```
pub struct ItemStore {
    partitions: DashMap<String, Partition>,
}

impl ItemStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self {
            partitions: DashMap::new(),
        }
    }

    /// Create with expected number of partitions
    pub fn with_capacity(num_partitions: usize) -> Self {
        Self {
            partitions: DashMap::with_capacity(num_partitions),
        }
    }

    /// Get an item by key
    ///
    /// Pure lookup. Returns a clone so no lock outlives the call.
    #[inline]
    pub fn get(&self, key: &Key) -> Option<Item> {
        self.partitions
            .get(key.partition_key())
            .and_then(|partition| partition.items.get(key.sort_key()).cloned())
    }

    /// Unconditionally insert or replace the item at `key`
    ///
    /// Returns the item that was replaced, if any.
    #[inline]
    pub fn set(&self, key: Key, item: Item) -> Option<Item> {
        self.partitions
            .entry(key.partition_key().to_string())
            .or_default()
            .items
            .insert(key.sort_key().to_string(), item)
    }

    /// Check if an item exists at `key`
    #[inline]
    pub fn contains(&self, key: &Key) -> bool {
        self.partitions
            .get(key.partition_key())
            .map(|partition| partition.items.contains_key(key.sort_key()))
            .unwrap_or(false)
    }

    /// Get total number of items across all partitions
    pub fn len(&self) -> usize {
        self.partitions.iter().map(|entry| entry.value().len()).sum()
    }

    /// Check if the store holds no items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get number of partitions holding at least one item
    pub fn partition_count(&self) -> usize {
        self.partitions.len()
    }

    /// Get count of items within one partition
    pub fn partition_len(&self, partition_key: &str) -> usize {
        self.partitions
            .get(partition_key)
            .map(|partition| partition.len())
            .unwrap_or(0)
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemStore")
            .field("partition_count", &self.partition_count())
            .field("len", &self.len())
            .finish()
    }
}
