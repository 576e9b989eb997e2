//! Typed spreadsheet cell values and their canonical text form.

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Largest magnitude at which every integral `f64` is exactly representable.
const MAX_EXACT_FLOAT_INT: f64 = 9_007_199_254_740_992.0;

/// A single cell as read from a worksheet.
///
/// Spreadsheet error cells (`#N/A`, `#DIV/0!`) load as [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value in the cell.
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Time of day without a date part.
    Time(NaiveTime),
    Duration(TimeDelta),
}

impl CellValue {
    /// Returns true for [`CellValue::Empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Canonical text rendering.
    ///
    /// Text is returned unchanged and `Empty` becomes `""`. Integral floats
    /// render without a fractional part so `2023.0` reads `2023`.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write_float(f, *value),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::DateTime(value) => {
                write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S"))?;
                write_micros(f, value.nanosecond())
            }
            Self::Time(value) => {
                write!(f, "{}", value.format("%H:%M:%S"))?;
                write_micros(f, value.nanosecond())
            }
            Self::Duration(value) => write_duration(f, *value),
        }
    }
}

/// Shortest round-trip digits; exponent form (`1e-07`, `1.5e+20`) outside
/// `1e-4 <= |x| < 1e16`.
fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
    }
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_FLOAT_INT {
        // Also folds -0.0 into "0".
        return write!(f, "{}", value as i64);
    }
    let scientific = format!("{value:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..16).contains(&exponent) {
        let plain = value.to_string();
        if plain.contains('.') {
            f.write_str(&plain)
        } else {
            write!(f, "{plain}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

fn write_micros(f: &mut fmt::Formatter<'_>, nanos: u32) -> fmt::Result {
    let micros = (nanos % 1_000_000_000) / 1_000;
    if micros == 0 {
        Ok(())
    } else {
        write!(f, ".{micros:06}")
    }
}

fn write_duration(f: &mut fmt::Formatter<'_>, value: TimeDelta) -> fmt::Result {
    let total = value.num_seconds();
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    write!(
        f,
        "{days} days {:02}:{:02}:{:02}",
        rest / 3_600,
        (rest % 3_600) / 60,
        rest % 60
    )?;
    let micros = value.subsec_nanos().unsigned_abs() / 1_000;
    if micros == 0 {
        Ok(())
    } else {
        write!(f, ".{micros:06}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn integral_floats_drop_fraction() {
        assert_eq!(CellValue::Float(2023.0).to_text(), "2023");
        assert_eq!(CellValue::Float(-0.0).to_text(), "0");
        assert_eq!(CellValue::Float(3.5).to_text(), "3.5");
        assert_eq!(CellValue::Float(0.1).to_text(), "0.1");
    }

    #[test]
    fn extreme_floats_use_exponent_form() {
        assert_eq!(CellValue::Float(1e-7).to_text(), "1e-07");
        assert_eq!(CellValue::Float(-1.5e-5).to_text(), "-1.5e-05");
        assert_eq!(CellValue::Float(1e20).to_text(), "1e+20");
        assert_eq!(CellValue::Float(1.5e300).to_text(), "1.5e+300");
        assert_eq!(CellValue::Float(0.0001).to_text(), "0.0001");
        assert_eq!(CellValue::Float(12_345.678).to_text(), "12345.678");
    }

    #[test]
    fn integral_floats_past_exact_range_keep_fraction() {
        assert_eq!(
            CellValue::Float(9_007_199_254_740_994.0).to_text(),
            "9007199254740994.0"
        );
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(CellValue::Float(f64::NAN).to_text(), "nan");
        assert_eq!(CellValue::Float(f64::INFINITY).to_text(), "inf");
        assert_eq!(CellValue::Float(f64::NEG_INFINITY).to_text(), "-inf");
    }

    #[test]
    fn ints_and_bools() {
        assert_eq!(CellValue::Int(42).to_text(), "42");
        assert_eq!(CellValue::Int(-7).to_text(), "-7");
        assert_eq!(CellValue::Bool(true).to_text(), "True");
        assert_eq!(CellValue::Bool(false).to_text(), "False");
    }

    #[test]
    fn text_is_untouched() {
        let raw = "  Ünïcødé 2023.0 ";
        assert_eq!(CellValue::Text(raw.to_string()).to_text(), raw);
    }

    #[test]
    fn empty_renders_empty_string() {
        assert_eq!(CellValue::Empty.to_text(), "");
        assert!(CellValue::Empty.is_empty());
        assert!(!CellValue::Text(String::new()).is_empty());
    }

    #[test]
    fn datetimes() {
        let midnight = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            CellValue::DateTime(midnight).to_text(),
            "2024-01-15 00:00:00"
        );

        let fractional = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_micro_opt(8, 30, 5, 250)
            .unwrap();
        assert_eq!(
            CellValue::DateTime(fractional).to_text(),
            "2024-01-15 08:30:05.000250"
        );
    }

    #[test]
    fn times_and_durations() {
        let time = NaiveTime::from_hms_opt(13, 5, 0).unwrap();
        assert_eq!(CellValue::Time(time).to_text(), "13:05:00");

        let span = TimeDelta::hours(26) + TimeDelta::minutes(3);
        assert_eq!(CellValue::Duration(span).to_text(), "1 days 02:03:00");
        assert_eq!(
            CellValue::Duration(TimeDelta::zero()).to_text(),
            "0 days 00:00:00"
        );
    }
}
