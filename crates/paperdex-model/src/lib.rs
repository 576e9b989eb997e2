//! Data model for exporting paper metadata spreadsheets to JSON.

pub mod cell;
pub mod document;
pub mod options;
pub mod table;

pub use cell::CellValue;
pub use document::{Facet, OutputDocument, Record};
pub use options::{
    DEFAULT_FACETS, DEFAULT_NA_VALUES, DEFAULT_OUTPUT, DEFAULT_PILLAR_COLUMN, DEFAULT_PILLARS,
    ExportOptions, PillarSource, Preset, default_facets, default_na_values, default_pillars,
};
pub use table::{RawTable, TextTable};
