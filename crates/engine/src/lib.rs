//! Conditional write engine for condkv
//!
//! This crate implements attribute-not-exists conditional puts:
//! - ConditionalPut: lookup → evaluate → commit or reject, over an ItemStore
//! - Table: serialized puts, reads, metrics and a configuration builder
//!
//! A condition is evaluated against the item already stored at the target
//! key. If nothing is stored there it passes vacuously, whatever it names.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod put;
pub mod table;

pub use put::{ConditionalPut, Evaluation, PutOutcome};
pub use table::{Table, TableBuilder, TableMetrics};
