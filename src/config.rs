use crate::flatten::FlattenConfig;
use crate::gate::DEFAULT_THRESHOLD;
use std::path::PathBuf;

/// Configuration for a fetch-and-export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Arrays longer than this are exported, everything else is returned as JSON
    pub threshold: usize,

    /// Where the workbook is written. Overwritten on every export.
    pub output_path: PathBuf,

    /// Name of the single worksheet
    pub sheet_name: String,

    /// Key path separator and scalar wrapping
    pub flatten: FlattenConfig,
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            threshold: DEFAULT_THRESHOLD,
            output_path: PathBuf::from("output.xlsx"),
            sheet_name: String::from("Data"),
            flatten: FlattenConfig::default(),
        }
    }
}
