//! Structural column filtering.

use std::sync::LazyLock;

use paperdex_model::RawTable;
use regex::Regex;
use tracing::debug;

/// Headers assigned by the loader to blank header cells.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Unnamed").expect("Invalid placeholder regex"));

/// True for auto-generated placeholder headers such as `Unnamed: 3`.
pub fn is_placeholder(header: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(header)
}

/// Drops placeholder columns, keeping the remaining columns in source order.
pub fn filter_columns(mut table: RawTable) -> RawTable {
    table.retain_columns(|_, header| {
        let placeholder = is_placeholder(header);
        if placeholder {
            debug!(column = %header, "dropping placeholder column");
        }
        !placeholder
    });
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperdex_model::CellValue;

    #[test]
    fn placeholder_matching_is_prefix_only() {
        assert!(is_placeholder("Unnamed: 0"));
        assert!(is_placeholder("Unnamed: 12"));
        assert!(is_placeholder("Unnamed"));
        assert!(!is_placeholder("unnamed: 0"));
        assert!(!is_placeholder(" Unnamed: 0"));
        assert!(!is_placeholder("Title"));
    }

    #[test]
    fn filter_keeps_named_columns() {
        let mut table = RawTable::new(vec![
            "Unnamed: 0".into(),
            "Title".into(),
            "Unnamed: 2".into(),
            "Year".into(),
        ]);
        table.push_row(vec![
            CellValue::Int(0),
            CellValue::Text("Paper X".into()),
            CellValue::Empty,
            CellValue::Int(2023),
        ]);
        let table = filter_columns(table);
        assert_eq!(table.headers, vec!["Title", "Year"]);
        assert_eq!(
            table.rows[0],
            vec![CellValue::Text("Paper X".into()), CellValue::Int(2023)]
        );
    }
}
