//! Cell-to-text coercion.

use paperdex_model::{CellValue, RawTable, TextTable};
use tracing::debug;

/// Converts every cell to its canonical text.
///
/// Text cells are moved through unchanged; other values use
/// [`CellValue::to_text`]. Run [`fill_missing`](crate::fill_missing) first so
/// absent cells are already `""`.
pub fn stringify(table: RawTable) -> TextTable {
    let RawTable { headers, rows } = table;
    let mut leftover_empty = 0usize;
    let rows: Vec<Vec<String>> = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    CellValue::Text(text) => text,
                    CellValue::Empty => {
                        leftover_empty += 1;
                        String::new()
                    }
                    other => other.to_text(),
                })
                .collect::<Vec<String>>()
        })
        .collect();
    if leftover_empty > 0 {
        debug!(leftover_empty, "empty cells reached stringify");
    }
    TextTable { headers, rows }
}
