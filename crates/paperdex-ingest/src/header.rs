//! Header row construction.

use std::collections::HashMap;

use paperdex_model::CellValue;

use crate::cell::is_blank;

/// Prefix given to columns whose header cell was blank.
pub const PLACEHOLDER_PREFIX: &str = "Unnamed";

/// Placeholder name for a blank header at a zero-based sheet column.
pub fn placeholder_name(sheet_column: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}: {sheet_column}")
}

/// Builds column names from a header row.
///
/// `first_column` is the sheet column index of the first cell, so placeholder
/// names count from column A. Non-text headers use their canonical text.
/// Duplicates get `.1`, `.2`, ... suffixes.
pub fn build_headers(cells: &[CellValue], first_column: usize) -> Vec<String> {
    let names = cells
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            if is_blank(cell) {
                placeholder_name(first_column + idx)
            } else {
                cell.to_text()
            }
        })
        .collect();
    dedupe_headers(names)
}

/// Renames repeated headers so every name is unique.
///
/// The second `Title` becomes `Title.1`. A generated name that is already
/// taken is suffixed again, so `A, A.1, A` yields `A, A.1, A.1.1`.
pub fn dedupe_headers(names: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(names.len());
    for name in names {
        let mut candidate = name.clone();
        let mut current = counts.get(&candidate).copied().unwrap_or(0);
        while current > 0 {
            counts.insert(candidate.clone(), current + 1);
            candidate = format!("{candidate}.{current}");
            current = counts.get(&candidate).copied().unwrap_or(0);
        }
        if candidate != name {
            tracing::debug!(original = %name, renamed = %candidate, "duplicate header renamed");
        }
        counts.insert(candidate.clone(), current + 1);
        result.push(candidate);
    }
    result
}
