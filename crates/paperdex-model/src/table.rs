//! In-memory tables flowing between pipeline stages.

use crate::cell::CellValue;
use crate::document::Record;

/// A sheet as loaded: header names plus typed rows.
///
/// Every row is exactly as wide as `headers`; [`RawTable::push_row`] pads
/// short rows with [`CellValue::Empty`] and drops overflow cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Creates an empty table with the given headers.
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row, normalizing its width to the header count.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.headers.len(), CellValue::Empty);
        self.rows.push(row);
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Keeps only the columns whose index satisfies `keep`, preserving order.
    pub fn retain_columns<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, &str) -> bool,
    {
        let mask: Vec<bool> = self
            .headers
            .iter()
            .enumerate()
            .map(|(idx, header)| keep(idx, header))
            .collect();
        let mut idx = 0;
        self.headers.retain(|_| {
            let kept = mask[idx];
            idx += 1;
            kept
        });
        for row in &mut self.rows {
            let mut idx = 0;
            row.retain(|_| {
                let kept = mask[idx];
                idx += 1;
                kept
            });
        }
    }
}

/// A fully stringified table, ready to become records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Zips each row with the headers.
    pub fn into_records(self) -> Vec<Record> {
        let Self { headers, rows } = self;
        rows.into_iter()
            .map(|row| {
                headers
                    .iter()
                    .cloned()
                    .zip(row)
                    .collect::<Record>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::Text(value.to_string())
    }

    #[test]
    fn push_row_pads_and_truncates() {
        let mut table = RawTable::new(vec!["A".into(), "B".into()]);
        table.push_row(vec![text("a")]);
        table.push_row(vec![text("a"), text("b"), text("c")]);
        assert_eq!(table.rows[0], vec![text("a"), CellValue::Empty]);
        assert_eq!(table.rows[1], vec![text("a"), text("b")]);
    }

    #[test]
    fn retain_columns_keeps_order() {
        let mut table = RawTable::new(vec!["A".into(), "B".into(), "C".into()]);
        table.push_row(vec![text("1"), text("2"), text("3")]);
        table.retain_columns(|_, name| name != "B");
        assert_eq!(table.headers, vec!["A", "C"]);
        assert_eq!(table.rows[0], vec![text("1"), text("3")]);
    }

    #[test]
    fn text_table_into_records() {
        let table = TextTable {
            headers: vec!["Title".into(), "Year".into()],
            rows: vec![vec!["Paper X".into(), "2023".into()]],
        };
        let records = table.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("Title"), Some("Paper X"));
        assert_eq!(records[0].get("Year"), Some("2023"));
    }
}
