use crate::flatten::FlattenedRecord;
use std::collections::HashSet;

/// Header columns for a batch, in the order keys were first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of the keys of every record, not just the first one
    pub fn from_records(records: &[FlattenedRecord]) -> Self {
        let mut columns = ColumnSet::new();
        for record in records {
            columns.extend(record);
        }
        columns
    }

    /// Add any keys of `record` not seen yet
    pub fn extend(&mut self, record: &FlattenedRecord) {
        for key in record.keys() {
            if !self.seen.contains(key) {
                self.seen.insert(key.clone());
                self.names.push(key.clone());
            }
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }
}
