//! Convenient imports for condkv.
//!
//! ```
//! use condkv::prelude::*;
//!
//! let table = Table::new();
//! let key = Key::new("1", "1");
//! assert!(table.get_item(&key).is_none());
//! ```

// Main entry point
pub use crate::{Table, TableBuilder};

// Error handling
pub use crate::{Error, Result};

// Outcomes
pub use crate::{PutOutcome, TableMetrics};

// Data model
pub use crate::types::{Condition, Item, Key, KeySchema, Value};
