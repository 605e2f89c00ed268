//! Public data model types.
//!
//! This module re-exports types from internal crates with a clean public interface.

pub use condkv_core::Condition;
pub use condkv_core::Item;
pub use condkv_core::Key;
pub use condkv_core::KeySchema;
pub use condkv_core::Value;
