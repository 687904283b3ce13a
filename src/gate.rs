use serde_json::Value;

/// Record count at or below which data is returned as JSON
pub const DEFAULT_THRESHOLD: usize = 10;

/// What to do with a fetched document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Hand the document back unchanged
    PassThrough,
    /// Write the records to a spreadsheet
    Export,
}

/// Only arrays strictly longer than `threshold` are exported
pub fn decide(value: &Value, threshold: usize) -> Mode {
    match value {
        Value::Array(items) if items.len() > threshold => Mode::Export,
        _ => Mode::PassThrough,
    }
}
