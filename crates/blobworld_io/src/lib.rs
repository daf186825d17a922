//! # Blobworld IO
//!
//! Export and analysis I/O for the blobworld simulation:
//! - Structured error handling
//! - CSV export of the per-tick statistics log
//! - JSON-lines tick logging
//! - Reading exported tables back with column selection and normalization

/// Error types and result aliases for I/O operations
pub mod error;
/// Row-oriented CSV export of tick statistics
pub mod export;
/// JSON-lines tick log
pub mod history;
/// JSON helpers
pub mod serialization;
/// End-of-run summary record
pub mod summary;
/// Exported-table reader and min-max normalization
pub mod table;

pub use error::{IoError, Result};
pub use export::{export_csv, write_csv};
pub use history::TickLogger;
pub use serialization::{from_json, read_json_file, to_json, to_json_pretty, write_json_file};
pub use summary::RunSummary;
pub use table::{min_max_normalize, ColumnSelection, StatsTable};
