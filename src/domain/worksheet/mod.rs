//! Worksheet module - the decisional-balance record and its exchange format.
//!
//! - `quadrant` - the four categories and their stage descriptors
//! - `record` - `QuadrantRecord` and `Worksheet` value objects
//! - `csv` - single-row CSV import/export

mod csv;
mod quadrant;
mod record;

pub use csv::{
    export_csv, export_file_name, parse_import, CsvExport, ImportError, ImportedRow, CSV_HEADER,
    REQUIRED_IMPORT_FIELDS,
};
pub use quadrant::{Accent, Quadrant, StageDescriptor};
pub use record::{QuadrantRecord, Worksheet};
