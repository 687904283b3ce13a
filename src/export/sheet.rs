use crate::error::WriteError;
use crate::export::columns::ColumnSet;
use crate::flatten::FlattenedRecord;
use rust_xlsxwriter::{Workbook, Worksheet};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Largest row count a worksheet holds, header included
pub const MAX_ROWS: usize = 1_048_576;

/// Largest column count a worksheet holds
pub const MAX_COLUMNS: usize = 16_384;

/// Writes flattened records to a single-sheet xlsx workbook
pub struct SheetWriter {
    sheet_name: String,
}

impl SheetWriter {
    pub fn new(sheet_name: impl Into<String>) -> Self {
        SheetWriter {
            sheet_name: sheet_name.into(),
        }
    }

    /// Write the header row and one row per record to `path`, replacing any
    /// existing file. Returns the path written.
    pub fn write<P: AsRef<Path>>(
        &self,
        path: P,
        columns: &ColumnSet,
        rows: &[FlattenedRecord],
    ) -> Result<PathBuf, WriteError> {
        let path = path.as_ref();
        let mut workbook = self.build_workbook(columns, rows)?;
        workbook.save(path)?;
        Ok(path.to_path_buf())
    }

    fn build_workbook(
        &self,
        columns: &ColumnSet,
        rows: &[FlattenedRecord],
    ) -> Result<Workbook, WriteError> {
        check_limits(columns.len(), rows.len())?;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.sheet_name)?;

        for (col, name) in columns.names().iter().enumerate() {
            worksheet.write_string(0, col as u16, name)?;
        }

        for (idx, record) in rows.iter().enumerate() {
            let row = (idx + 1) as u32;
            for (col, name) in columns.names().iter().enumerate() {
                // Absent keys stay blank
                if let Some(value) = record.get(name) {
                    write_cell(worksheet, row, col as u16, value)?;
                }
            }
        }

        Ok(workbook)
    }
}

impl Default for SheetWriter {
    fn default() -> Self {
        SheetWriter::new("Data")
    }
}

/// `record_count` excludes the header row
fn check_limits(column_count: usize, record_count: usize) -> Result<(), WriteError> {
    if column_count > MAX_COLUMNS {
        return Err(WriteError::Limit {
            what: "column",
            count: column_count,
            limit: MAX_COLUMNS,
        });
    }
    if record_count + 1 > MAX_ROWS {
        return Err(WriteError::Limit {
            what: "row",
            count: record_count + 1,
            limit: MAX_ROWS,
        });
    }
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &Value) -> Result<(), WriteError> {
    match value {
        Value::Null => {}
        Value::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        Value::Number(n) => match n.as_f64() {
            Some(f) => {
                worksheet.write_number(row, col, f)?;
            }
            None => {
                worksheet.write_string(row, col, n.to_string())?;
            }
        },
        // xlsx has no empty text cell; "" is written as blank, same as null
        Value::String(s) if s.is_empty() => {}
        Value::String(s) => {
            worksheet.write_string(row, col, s)?;
        }
        // Flattened records carry no nested values, but write them as text if they show up
        other => {
            worksheet.write_string(row, col, other.to_string())?;
        }
    }
    Ok(())
}
