//! # jsonsheet - JSON endpoints to spreadsheets
//!
//! Fetches a JSON document over HTTP. Small results come back as JSON; arrays
//! longer than a record threshold are flattened and written to an `.xlsx`
//! workbook instead.
//!
//! ## Modules
//!
//! - **fetch**: one GET per call, body decoded with simd-json
//! - **gate**: pass-through vs. export decision
//! - **flatten**: nested records to dotted-path rows
//! - **export**: column union and worksheet writing
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonsheet::{process_value, ExportConfig, Outcome};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), jsonsheet::Error> {
//! let data = json!([{"id": 1}, {"id": 2}]);
//!
//! // Two records are under the default threshold of 10
//! let outcome = process_value(data.clone(), &ExportConfig::default())?;
//! assert_eq!(outcome, Outcome::PassThrough(data));
//! # Ok(())
//! # }
//! ```
//!
//! ### Flattening
//!
//! ```rust
//! use jsonsheet::Flattener;
//! use serde_json::json;
//!
//! let row = Flattener::default().flatten_item(&json!({
//!     "id": 1,
//!     "address": {"city": "Gwenborough"},
//!     "tags": ["a", "b"]
//! }));
//!
//! assert_eq!(row["address.city"], "Gwenborough");
//! assert_eq!(row["tags"], r#"["a","b"]"#);
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod fetch;
pub mod flatten;
pub mod gate;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types for convenience
pub use config::ExportConfig;
pub use error::{Error, FetchError, Result, WriteError};
pub use export::{ColumnSet, SheetWriter};
pub use fetch::Fetcher;
pub use flatten::{FlattenConfig, FlattenedRecord, Flattener};
pub use gate::{decide, Mode, DEFAULT_THRESHOLD};
pub use pipeline::{fetch_data, process_value, Outcome};
