//! Storage layer for condkv
//!
//! This crate implements the in-memory item store:
//! - ItemStore: DashMap of partitions, FxHashMap of sort keys within
//! - Unconditional get/set primitives only

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod sharded;

pub use sharded::ItemStore;
