//! Table normalization for the paper metadata export.
//!
//! Each stage is a plain function over owned tables so stages compose in
//! order and test in isolation:
//!
//! 1. [`filter_columns`]: drop `Unnamed: N` placeholder columns
//! 2. [`fill_missing`]: absent cells and missing-value markers become `""`
//! 3. [`stringify`]: every cell becomes its canonical text
//! 4. [`derive_pillars`]: distinct trimmed `Pillar` values, sorted
//! 5. [`assemble`]: build the [`OutputDocument`](paperdex_model::OutputDocument)
//!
//! [`normalize`] runs the whole sequence from [`ExportOptions`](paperdex_model::ExportOptions).

mod assemble;
mod columns;
mod missing;
mod pillars;
mod stringify;

pub use assemble::{assemble, normalize};
pub use columns::{filter_columns, is_placeholder};
pub use missing::fill_missing;
pub use pillars::derive_pillars;
pub use stringify::stringify;
