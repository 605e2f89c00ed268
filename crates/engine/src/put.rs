//! Conditional put
//!
//! The only place conditional semantics live. A put:
//!
//! ```text
//! 1. derive_key()  - Key from the new item's key attributes
//! 2. lookup        - current item at that Key
//! 3. evaluate()    - VacuousPass if nothing is stored, else check each name
//! 4. IF failed: reject, store untouched
//! 5. ELSE: set() the new item in full
//! ```
//!
//! The condition is evaluated against the item already stored at the
//! target key, never against the item being written. When nothing is stored
//! there the condition passes without being looked at, so a condition naming
//! a key attribute can only ever fail on an overwrite.
//!
//! [`ConditionalPut`] performs no locking. Concurrent callers must serialize
//! lookup-to-commit per key; [`Table`](crate::Table) does this with its
//! commit lock.

use condkv_core::{Condition, Error, Item, Key, KeySchema, Result};
use condkv_storage::ItemStore;
use tracing::{debug, trace};

/// Result of evaluating a condition against the current item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Nothing stored at the key; the condition was not consulted
    VacuousPass,
    /// An item is stored and none of the named attributes are on it
    Passed,
    /// An item is stored and carries at least one named attribute
    Failed {
        /// Names from the condition found on the current item, in condition order
        present: Vec<String>,
    },
}

/// Successful put
#[derive(Debug, Clone, PartialEq)]
pub struct PutOutcome {
    /// Key the item was written at
    pub key: Key,
    /// Item that was replaced, `None` for a fresh insert
    pub previous: Option<Item>,
}

impl PutOutcome {
    /// True when no item existed at the key, i.e. the condition passed vacuously
    pub fn is_insert(&self) -> bool {
        self.previous.is_none()
    }
}

/// Single-shot conditional put over an [`ItemStore`]
///
/// Stateless apart from borrowed references to the store and key schema.
pub struct ConditionalPut<'a> {
    store: &'a ItemStore,
    schema: &'a KeySchema,
}

impl<'a> ConditionalPut<'a> {
    /// Bind to a store and key schema
    pub fn new(store: &'a ItemStore, schema: &'a KeySchema) -> Self {
        Self { store, schema }
    }

    /// Evaluate `condition` against the item currently stored, if any
    ///
    /// Key attributes are not special-cased: they fail the check simply
    /// because every stored item carries them.
    pub fn evaluate(existing: Option<&Item>, condition: &Condition) -> Evaluation {
        let Some(existing) = existing else {
            return Evaluation::VacuousPass;
        };

        let present: Vec<String> = condition
            .attributes()
            .iter()
            .filter(|name| existing.contains(name))
            .cloned()
            .collect();

        if present.is_empty() {
            Evaluation::Passed
        } else {
            Evaluation::Failed { present }
        }
    }

    /// Write `item` if `condition` holds against the item at its key
    ///
    /// # Errors
    ///
    /// * `MissingKeyAttribute` / `InvalidKeyAttribute` - `item` cannot be
    ///   addressed; the store is not touched
    /// * `ConditionalCheckFailed` - the condition failed; the store is
    ///   left exactly as it was. The message lists every requested name.
    pub fn execute(&self, item: Item, condition: &Condition) -> Result<PutOutcome> {
        let key = item.key(self.schema)?;

        let existing = self.store.get(&key);
        trace!(key = %key, found = existing.is_some(), "conditional put lookup");

        match Self::evaluate(existing.as_ref(), condition) {
            Evaluation::Failed { present } => {
                let expression = condition.expression();
                debug!(key = %key, expression = %expression, ?present, "conditional check failed");
                Err(Error::ConditionalCheckFailed {
                    expression,
                    present,
                })
            }
            evaluation => {
                let previous = self.store.set(key.clone(), item);
                debug!(
                    key = %key,
                    vacuous = matches!(evaluation, Evaluation::VacuousPass),
                    replaced = previous.is_some(),
                    "conditional put committed"
                );
                Ok(PutOutcome { key, previous })
            }
        }
    }
}
