use crate::flatten::types::{FlattenConfig, FlattenedRecord};
use serde_json::{Map, Value};

/// Turns nested JSON records into single-level rows keyed by dotted paths
pub struct Flattener {
    config: FlattenConfig,
}

impl Flattener {
    pub fn new(config: FlattenConfig) -> Self {
        Flattener { config }
    }

    /// Flatten one item of a batch.
    ///
    /// Objects are walked directly, scalars are wrapped under the configured
    /// wrap key, and arrays are walked with their element indexes as keys.
    pub fn flatten_item(&self, item: &Value) -> FlattenedRecord {
        let mut out = FlattenedRecord::new();
        match item {
            Value::Object(obj) => return self.flatten(obj),
            Value::Array(arr) => {
                for (idx, value) in arr.iter().enumerate() {
                    self.flatten_field(&idx.to_string(), value, "", &mut out);
                }
            }
            scalar => {
                out.insert(self.config.wrap_key.clone(), scalar.clone());
            }
        }
        out
    }

    /// Flatten a single object record
    pub fn flatten(&self, record: &Map<String, Value>) -> FlattenedRecord {
        let mut out = FlattenedRecord::new();
        self.flatten_object(record, "", &mut out);
        out
    }

    /// Flatten every item of a batch, keeping input order
    pub fn flatten_all(&self, items: &[Value]) -> Vec<FlattenedRecord> {
        items.iter().map(|item| self.flatten_item(item)).collect()
    }

    fn flatten_object(&self, obj: &Map<String, Value>, prefix: &str, out: &mut FlattenedRecord) {
        for (key, value) in obj.iter() {
            self.flatten_field(key, value, prefix, out);
        }
    }

    fn flatten_field(&self, key: &str, value: &Value, prefix: &str, out: &mut FlattenedRecord) {
        let path = self.join(prefix, key);

        match value {
            Value::Object(nested) => {
                self.flatten_object(nested, &path, out);
            }
            Value::Array(_) => {
                // Compact JSON text, one cell for the whole sequence
                out.insert(path, Value::String(value.to_string()));
            }
            _ => {
                out.insert(path, value.clone());
            }
        }
    }

    fn join(&self, prefix: &str, key: &str) -> String {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}{}{}", prefix, self.config.separator, key)
        }
    }
}

impl Default for Flattener {
    fn default() -> Self {
        Flattener::new(FlattenConfig::default())
    }
}
