use crate::config::ExportConfig;
use crate::error::Result;
use crate::export::{export_records, SheetWriter};
use crate::fetch::Fetcher;
use crate::flatten::Flattener;
use crate::gate::{decide, Mode};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Result of a run: the data itself, or where it was written
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    /// Serializes as `{"filePath": "..."}`
    Exported {
        #[serde(rename = "filePath")]
        file_path: PathBuf,
    },
    /// Serializes as the original document
    PassThrough(Value),
}

impl Outcome {
    pub fn is_exported(&self) -> bool {
        matches!(self, Outcome::Exported { .. })
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        match self {
            Outcome::Exported { file_path } => Some(file_path),
            Outcome::PassThrough(_) => None,
        }
    }
}

/// Fetch `url` and either return the JSON or export it to a spreadsheet
pub async fn fetch_data(fetcher: &Fetcher, url: &str, config: &ExportConfig) -> Result<Outcome> {
    let value = fetcher.fetch(url).await?;
    process_value(value, config)
}

/// Run the threshold decision and, if needed, the export on a decoded document
pub fn process_value(value: Value, config: &ExportConfig) -> Result<Outcome> {
    match (decide(&value, config.threshold), value) {
        (Mode::Export, Value::Array(items)) => {
            info!(
                "Record count {} exceeds threshold {}. Generating Excel file...",
                items.len(),
                config.threshold
            );
            let flattener = Flattener::new(config.flatten.clone());
            let writer = SheetWriter::new(config.sheet_name.as_str());
            let file_path = export_records(&items, &flattener, &writer, &config.output_path)?;
            Ok(Outcome::Exported { file_path })
        }
        (_, value) => {
            info!("Returning JSON (small number of records).");
            Ok(Outcome::PassThrough(value))
        }
    }
}
