//! Pillar derivation from record data.

use std::collections::BTreeSet;

use paperdex_model::Record;
use tracing::warn;

/// Distinct trimmed values of `column`, sorted ascending.
///
/// Empty values after trimming are dropped. Records without the column
/// contribute nothing. Values differing only in surrounding whitespace
/// collapse to one entry; case differences are kept apart.
pub fn derive_pillars(records: &[Record], column: &str) -> Vec<String> {
    let mut seen_column = false;
    let mut pillars = BTreeSet::new();
    for record in records {
        let Some(value) = record.get(column) else {
            continue;
        };
        seen_column = true;
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            pillars.insert(trimmed.to_string());
        }
    }
    if !records.is_empty() && !seen_column {
        warn!(column = %column, "pillar column not found in any record");
    }
    pillars.into_iter().collect()
}
