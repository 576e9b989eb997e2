//! Conversion from calamine cells to [`CellValue`].

use calamine::{Data, DataType, ExcelDateTime};
use chrono::NaiveTime;
use paperdex_model::CellValue;

/// Converts one worksheet cell.
pub fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(value) => CellValue::Text(value.clone()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => excel_datetime(value),
        Data::DateTimeIso(value) => data
            .as_datetime()
            .or_else(|| data.as_date().map(|date| date.and_time(NaiveTime::MIN)))
            .map_or_else(|| CellValue::Text(value.clone()), CellValue::DateTime),
        // ODS time cells are `PT13H05M00S` durations.
        Data::DurationIso(value) => data
            .as_time()
            .map_or_else(|| CellValue::Text(value.clone()), CellValue::Time),
        // `#DIV/0!`, `#REF!` and friends carry no value.
        Data::Error(_) => CellValue::Empty,
    }
}

fn excel_datetime(value: &ExcelDateTime) -> CellValue {
    if value.is_duration() {
        return match value.as_duration() {
            Some(duration) => CellValue::Duration(duration),
            None => CellValue::Float(value.as_f64()),
        };
    }
    match value.as_datetime() {
        // Serials below one day carry no date part.
        Some(datetime) if value.as_f64() < 1.0 => CellValue::Time(datetime.time()),
        Some(datetime) => CellValue::DateTime(datetime),
        None => CellValue::Float(value.as_f64()),
    }
}

/// True when a cell has no content at all.
pub fn is_blank(value: &CellValue) -> bool {
    match value {
        CellValue::Empty => true,
        CellValue::Text(text) => text.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn scalar_cells() {
        assert_eq!(cell_value(&Data::Empty), CellValue::Empty);
        assert_eq!(cell_value(&Data::Int(7)), CellValue::Int(7));
        assert_eq!(cell_value(&Data::Float(2.5)), CellValue::Float(2.5));
        assert_eq!(cell_value(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            cell_value(&Data::String("Paper X".to_string())),
            CellValue::Text("Paper X".to_string())
        );
    }

    #[test]
    fn error_cells_are_empty() {
        for error in [
            CellErrorType::NA,
            CellErrorType::Div0,
            CellErrorType::Ref,
            CellErrorType::Value,
            CellErrorType::Name,
            CellErrorType::Null,
            CellErrorType::Num,
        ] {
            assert_eq!(cell_value(&Data::Error(error)), CellValue::Empty);
        }
    }

    #[test]
    fn ods_dates_render_like_excel_dates() {
        let with_time = cell_value(&Data::DateTimeIso("2024-01-15T08:30:05".to_string()));
        assert_eq!(with_time.to_text(), "2024-01-15 08:30:05");

        let date_only = cell_value(&Data::DateTimeIso("2024-01-15".to_string()));
        assert_eq!(date_only.to_text(), "2024-01-15 00:00:00");
    }

    #[test]
    fn ods_time_values_become_times() {
        let time = cell_value(&Data::DurationIso("PT13H05M00S".to_string()));
        assert_eq!(time, CellValue::Time(NaiveTime::from_hms_opt(13, 5, 0).unwrap()));
        assert_eq!(time.to_text(), "13:05:00");
    }

    #[test]
    fn unparseable_iso_text_is_kept() {
        assert_eq!(
            cell_value(&Data::DateTimeIso("sometime in 2024".to_string())),
            CellValue::Text("sometime in 2024".to_string())
        );
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(&CellValue::Empty));
        assert!(is_blank(&CellValue::Text(String::new())));
        assert!(!is_blank(&CellValue::Text(" ".to_string())));
        assert!(!is_blank(&CellValue::Int(0)));
    }
}
