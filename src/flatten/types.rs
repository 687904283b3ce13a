use serde_json::{Map, Value};

/// A single-level record: dot-joined path -> leaf value.
///
/// Values are never objects. Arrays found during flattening have already been
/// turned into their JSON string form.
pub type FlattenedRecord = Map<String, Value>;

/// Configuration for the flattening pass
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    /// Joins parent and child keys, e.g. "." gives `address.city`
    pub separator: String,

    /// Key used when a batch item is a bare scalar instead of an object
    pub wrap_key: String,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        FlattenConfig {
            separator: String::from("."),
            wrap_key: String::from("value"),
        }
    }
}
