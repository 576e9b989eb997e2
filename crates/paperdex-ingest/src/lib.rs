//! Workbook ingestion for the paper metadata export.
//!
//! Opens spreadsheet workbooks (xlsx, xlsm, xls, xlsb, ods) with calamine and
//! turns one sheet into a [`RawTable`](paperdex_model::RawTable):
//!
//! - **Sheet selection**: by name, or the first sheet when none is given
//! - **Headers**: blank header cells become `Unnamed: N`, duplicates get `.N` suffixes
//! - **Cells**: typed [`CellValue`](paperdex_model::CellValue)s; blank rows are dropped
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use paperdex_ingest::load;
//!
//! let table = load(Path::new("check.xlsx"), Some("Papers"))?;
//! println!("{} rows", table.height());
//! ```

mod cell;
mod error;
mod header;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use workbook::{list_sheets, load, range_to_table};

// === Headers ===
pub use header::{PLACEHOLDER_PREFIX, build_headers, dedupe_headers, placeholder_name};

// === Cells ===
pub use cell::{cell_value, is_blank};
