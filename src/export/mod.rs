//! Spreadsheet export
//!
//! Flattens a batch of records, unions their keys into a header row and
//! writes everything to one worksheet.

pub mod columns;
pub mod sheet;

pub use columns::ColumnSet;
pub use sheet::SheetWriter;

use crate::error::WriteError;
use crate::flatten::Flattener;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Flatten `items` and write them to `path` as a single worksheet
pub fn export_records<P: AsRef<Path>>(
    items: &[Value],
    flattener: &Flattener,
    writer: &SheetWriter,
    path: P,
) -> Result<PathBuf, WriteError> {
    let rows = flattener.flatten_all(items);
    let columns = ColumnSet::from_records(&rows);
    debug!("Flattened {} records into {} columns", rows.len(), columns.len());

    let written = writer.write(path, &columns, &rows)?;
    info!("Excel file saved at: {}", written.display());
    Ok(written)
}
