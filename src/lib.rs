//! # condkv
//!
//! An in-memory model of conditional writes against a table keyed by
//! partition key + sort key.
//!
//! A conditional put evaluates its `attribute_not_exists` condition against
//! the item already stored at the target key. When nothing is stored there,
//! the condition passes vacuously. As a result these three conditions behave
//! identically for any put:
//!
//! - `attribute_not_exists(pk)`
//! - `attribute_not_exists(sk)`
//! - `attribute_not_exists(pk) AND attribute_not_exists(sk)`
//!
//! Each fails exactly when an item already exists at the key being written.
//!
//! ## Quick Start
//!
//! ```
//! use condkv::prelude::*;
//!
//! let table = Table::new();
//!
//! table.put_item(Item::new().with("pk", "1").with("sk", "1"), &Condition::none())?;
//!
//! // (1, 2) is not stored, so the condition is never consulted
//! table.put_item(
//!     Item::new().with("pk", "1").with("sk", "2"),
//!     &Condition::attribute_not_exists("pk"),
//! )?;
//!
//! // (1, 1) is stored and has a "pk" attribute
//! let err = table
//!     .put_item(
//!         Item::new().with("pk", "1").with("sk", "1"),
//!         &Condition::attribute_not_exists("pk"),
//!     )
//!     .unwrap_err();
//! assert!(err.is_conditional_check_failed());
//! # Ok::<(), condkv::Error>(())
//! ```

#![warn(missing_docs)]

mod types;

pub mod prelude;

pub use condkv_core::{Error, Result};
pub use condkv_engine::{ConditionalPut, Evaluation, PutOutcome, Table, TableBuilder, TableMetrics};
pub use condkv_storage::ItemStore;

pub use types::*;
