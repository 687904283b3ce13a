//! JSON flattening - nested records into single-level rows
//!
//! Nested objects are walked depth-first and their keys joined into dotted
//! paths (`address.geo.lat`). Arrays are not expanded: each one is kept as a
//! single JSON string cell.

pub mod flattener;
pub mod types;

pub use flattener::Flattener;
pub use types::{FlattenConfig, FlattenedRecord};
