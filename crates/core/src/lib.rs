//! Core types for condkv
//!
//! This crate defines the data model shared by every layer:
//! - [`Key`] and [`KeySchema`]: composite item addressing
//! - [`Item`] and [`Value`]: attribute maps with opaque values
//! - [`Condition`]: conjunctive `attribute_not_exists` predicates
//! - [`Error`] and [`Result`]: the single error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod condition;
pub mod error;
pub mod item;
pub mod types;
pub mod value;

pub use condition::Condition;
pub use error::{Error, Result};
pub use item::Item;
pub use types::{Key, KeySchema, DEFAULT_PARTITION_KEY, DEFAULT_SORT_KEY};
pub use value::Value;
