//! Missing-value normalization.

use std::collections::HashSet;

use paperdex_model::{CellValue, RawTable};
use tracing::debug;

/// Replaces absent cells with the empty string.
///
/// A cell is absent when it is [`CellValue::Empty`] or when its whole text
/// equals one of `na_values`. Matching is exact: `" NA"` is kept.
pub fn fill_missing(mut table: RawTable, na_values: &[String]) -> RawTable {
    let markers: HashSet<&str> = na_values.iter().map(String::as_str).collect();
    let mut filled = 0usize;
    for row in &mut table.rows {
        for cell in row.iter_mut() {
            let missing = match cell {
                CellValue::Empty => true,
                CellValue::Text(text) => !text.is_empty() && markers.contains(text.as_str()),
                _ => false,
            };
            if missing {
                *cell = CellValue::Text(String::new());
                filled += 1;
            }
        }
    }
    debug!(filled, "missing cells filled");
    table
}
