//! Table: the entry point for conditional writes
//!
//! A [`Table`] owns one [`ItemStore`] and one [`KeySchema`]. Every put runs
//! lookup → evaluate → commit under the table's commit lock, so no two
//! callers can both observe "absent" for the same key and both commit.
//! Reads go straight to the store and never take the lock.
//!
//! Tables are independent: each owns its store, so any number can coexist
//! in one process.

use crate::put::{ConditionalPut, PutOutcome};
use condkv_core::{Condition, Item, Key, KeySchema, Result};
use condkv_storage::ItemStore;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// An in-memory table with composite keys and conditional puts
///
/// # Example
///
/// ```
/// use condkv_core::{Condition, Item, Key};
/// use condkv_engine::Table;
///
/// let table = Table::new();
/// let item = Item::new().with("pk", "1").with("sk", "1");
///
/// table.put_item(item.clone(), &Condition::none()).unwrap();
/// let err = table
///     .put_item(item, &Condition::attribute_not_exists("pk"))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "failed attribute_not_exists(pk)");
/// assert!(table.get_item(&Key::new("1", "1")).is_some());
/// ```
pub struct Table {
    store: ItemStore,
    schema: KeySchema,

    /// Commit serialization lock
    ///
    /// Held from lookup through set. Without it two puts on the same key can
    /// both evaluate against "absent" and both commit.
    commit_lock: Mutex<()>,

    counters: Counters,
}

#[derive(Debug, Default)]
struct Counters {
    committed: AtomicU64,
    rejected: AtomicU64,
    vacuous: AtomicU64,
    contract_violations: AtomicU64,
}

impl Table {
    /// Create an empty table with the default `pk`/`sk` key schema
    pub fn new() -> Self {
        Self::with_store(KeySchema::default(), ItemStore::new())
    }

    /// Create a builder for table configuration.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Create a table around an existing store
    ///
    /// The table takes ownership; from here on the store is only mutated by
    /// successful puts.
    pub fn with_store(schema: KeySchema, store: ItemStore) -> Self {
        Self {
            store,
            schema,
            commit_lock: Mutex::new(()),
            counters: Counters::default(),
        }
    }

    /// Key schema of this table
    pub fn schema(&self) -> &KeySchema {
        &self.schema
    }

    /// Derive the key `item` would be written at
    pub fn key_of(&self, item: &Item) -> Result<Key> {
        item.key(&self.schema)
    }

    /// Put `item`, provided every attribute named in `condition` is absent
    /// from the item currently stored at its key
    ///
    /// Passes vacuously when nothing is stored at the key. On success the
    /// new item replaces the old one in full.
    ///
    /// # Errors
    ///
    /// * `ConditionalCheckFailed` - the stored item has a named attribute
    /// * `MissingKeyAttribute` / `InvalidKeyAttribute` - `item` has no valid key
    pub fn put_item(&self, item: Item, condition: &Condition) -> Result<PutOutcome> {
        let _commit_guard = self.commit_lock.lock();
        let result = ConditionalPut::new(&self.store, &self.schema).execute(item, condition);
        self.record(&result, condition);
        result
    }

    /// Put with the condition given in expression form,
    /// e.g. `attribute_not_exists(pk) AND attribute_not_exists(sk)`
    ///
    /// # Errors
    ///
    /// `UnsupportedExpression` if the expression does not parse, otherwise as
    /// [`Table::put_item`].
    pub fn put_item_with_expression(&self, item: Item, expression: &str) -> Result<PutOutcome> {
        let condition = Condition::parse(expression)?;
        self.put_item(item, &condition)
    }

    /// Get the item at `key`
    pub fn get_item(&self, key: &Key) -> Option<Item> {
        self.store.get(key)
    }

    /// Check if an item exists at `key`
    pub fn contains(&self, key: &Key) -> bool {
        self.store.contains(key)
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Snapshot of put counters
    ///
    /// Counters move under the commit lock together with the store, and the
    /// snapshot is taken under it too, so `items` never runs ahead of
    /// `puts_committed`.
    pub fn metrics(&self) -> TableMetrics {
        let _commit_guard = self.commit_lock.lock();
        TableMetrics {
            puts_committed: self.counters.committed.load(Ordering::Relaxed),
            puts_rejected: self.counters.rejected.load(Ordering::Relaxed),
            vacuous_passes: self.counters.vacuous.load(Ordering::Relaxed),
            contract_violations: self.counters.contract_violations.load(Ordering::Relaxed),
            items: self.store.len(),
        }
    }

    fn record(&self, result: &Result<PutOutcome>, condition: &Condition) {
        match result {
            Ok(outcome) => {
                self.counters.committed.fetch_add(1, Ordering::Relaxed);
                if outcome.is_insert() && !condition.is_empty() {
                    self.counters.vacuous.fetch_add(1, Ordering::Relaxed);
                }
            }
            Err(e) if e.is_conditional_check_failed() => {
                self.counters.rejected.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                if e.is_contract_violation() {
                    self.counters
                        .contract_violations
                        .fetch_add(1, Ordering::Relaxed);
                }
                warn!(error = %e, "put rejected before lookup");
            }
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("schema", &self.schema)
            .field("store", &self.store)
            .finish()
    }
}

/// Table metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableMetrics {
    /// Puts that wrote an item
    pub puts_committed: u64,
    /// Puts rejected by a failed condition
    pub puts_rejected: u64,
    /// Committed puts whose non-empty condition passed only because nothing was stored
    pub vacuous_passes: u64,
    /// Puts refused because the item had no valid key
    pub contract_violations: u64,
    /// Items currently stored
    pub items: usize,
}

/// Builder for table configuration.
///
/// # Example
///
/// ```
/// use condkv_engine::Table;
///
/// let table = Table::builder()
///     .partition_key("user_id")
///     .sort_key("created_at")
///     .with_capacity(64)
///     .build()
///     .unwrap();
/// assert_eq!(table.schema().partition_key, "user_id");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    schema: KeySchema,
    capacity: Option<usize>,
}

impl TableBuilder {
    /// Create a builder with the default `pk`/`sk` schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the partition key attribute name
    pub fn partition_key(mut self, name: impl Into<String>) -> Self {
        self.schema.partition_key = name.into();
        self
    }

    /// Set the sort key attribute name
    pub fn sort_key(mut self, name: impl Into<String>) -> Self {
        self.schema.sort_key = name.into();
        self
    }

    /// Replace the whole key schema (e.g. one loaded from configuration)
    pub fn key_schema(mut self, schema: KeySchema) -> Self {
        self.schema = schema;
        self
    }

    /// Pre-size the store for an expected number of partitions
    pub fn with_capacity(mut self, partitions: usize) -> Self {
        self.capacity = Some(partitions);
        self
    }

    /// Validate the schema and create the table
    pub fn build(self) -> Result<Table> {
        self.schema.validate()?;
        let store = match self.capacity {
            Some(n) => ItemStore::with_capacity(n),
            None => ItemStore::new(),
        };
        Ok(Table::with_store(self.schema, store))
    }
}
