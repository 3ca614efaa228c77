//! Export and import of budget data
//!
//! - JSON: the full state in its persisted shape (export and import)
//! - CSV: expense rows for spreadsheets (export only)

pub mod csv;
pub mod json;

pub use self::csv::export_expenses_csv;
pub use self::json::{read_import_file, write_snapshot};
