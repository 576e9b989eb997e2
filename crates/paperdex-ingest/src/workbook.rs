//! Workbook opening, sheet selection and table loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use paperdex_model::{CellValue, RawTable};
use tracing::{debug, info};

use crate::cell::{cell_value, is_blank};
use crate::error::{IngestError, Result};
use crate::header::build_headers;

fn open(path: &Path) -> Result<Sheets<BufReader<File>>> {
    if !path.is_file() {
        return Err(IngestError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    open_workbook_auto(path).map_err(|e| IngestError::MalformedSource {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Lists sheet names in workbook order.
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    let workbook = open(path)?;
    Ok(workbook.sheet_names())
}

/// Loads one sheet into a [`RawTable`].
///
/// `sheet = None` selects the first sheet. The first row of the sheet's used
/// range is the header row; rows where every cell is blank are skipped.
pub fn load(path: &Path, sheet: Option<&str>) -> Result<RawTable> {
    let mut workbook = open(path)?;
    let available = workbook.sheet_names();
    let sheet_name = match sheet {
        Some(name) => {
            if !available.iter().any(|candidate| candidate == name) {
                return Err(IngestError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: name.to_string(),
                    available,
                });
            }
            name.to_string()
        }
        None => available
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoSheets {
                path: path.to_path_buf(),
            })?,
    };
    debug!(path = %path.display(), sheet = %sheet_name, "reading sheet");

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::MalformedSource {
            path: path.to_path_buf(),
            message: format!("sheet '{sheet_name}': {e}"),
        })?;
    let table = range_to_table(&range);
    info!(
        path = %path.display(),
        sheet = %sheet_name,
        columns = table.width(),
        rows = table.height(),
        "sheet loaded"
    );
    Ok(table)
}

/// Converts a worksheet range into a table.
pub fn range_to_table(range: &Range<Data>) -> RawTable {
    let first_column = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_value).collect::<Vec<CellValue>>());

    let Some(header_cells) = rows.next() else {
        return RawTable::default();
    };
    let mut table = RawTable::new(build_headers(&header_cells, first_column));
    let mut skipped = 0usize;
    for row in rows {
        if row.iter().all(is_blank) {
            skipped += 1;
            continue;
        }
        table.push_row(row);
    }
    if skipped > 0 {
        debug!(skipped, "skipped blank rows");
    }
    table
}
