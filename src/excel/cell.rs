use std::fmt;

use calamine::Data;
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// A single typed cell as it was read from the sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    DateTime(NaiveDateTime),
    Duration(Duration),
    Error(String),
}

impl CellValue {
    /// Text used for a header cell. Blank headers are named later from
    /// their column position, so they come back as `None`.
    pub fn header_label(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            CellValue::Text(s) if s.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Int(i) => CellValue::Int(*i),
            // Whole floats are stored as integers, the way spreadsheet readers
            // usually hand them back
            Data::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    CellValue::Int(*f as i64)
                } else {
                    CellValue::Float(*f)
                }
            }
            Data::Bool(b) => CellValue::Bool(*b),
            Data::Error(e) => CellValue::Error(e.to_string()),
            Data::DateTime(dt) => {
                if dt.is_duration() {
                    match dt.as_duration() {
                        Some(d) => CellValue::Duration(d),
                        None => CellValue::Float(dt.as_f64()),
                    }
                } else {
                    match dt.as_datetime() {
                        Some(d) => CellValue::DateTime(d),
                        None => CellValue::Float(dt.as_f64()),
                    }
                }
            }
            Data::DateTimeIso(s) => parse_iso_datetime(s)
                .map(CellValue::DateTime)
                .unwrap_or_else(|| CellValue::Text(s.clone())),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
        }
    }
}

fn parse_iso_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => f.write_str("NaN"),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(x) => f.write_str(&format_float(*x)),
            CellValue::Text(s) => f.write_str(&escape_control(s)),
            CellValue::Bool(true) => f.write_str("True"),
            CellValue::Bool(false) => f.write_str("False"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            CellValue::Duration(d) => f.write_str(&format_duration(*d)),
            CellValue::Error(e) => f.write_str(e),
        }
    }
}

/// Shortest round-trip repr with a trailing `.0` on whole values and an
/// exponent outside `1e-4..1e16`.
fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let abs = x.abs();
    if abs != 0.0 && !(1e-4..1e16).contains(&abs) {
        let sci = format!("{x:e}");
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let (sign, digits) = match exp.strip_prefix('-') {
            Some(d) => ('-', d),
            None => ('+', exp),
        };
        return format!("{mantissa}e{sign}{digits:0>2}");
    }

    let s = x.to_string();
    if s.contains('.') { s } else { format!("{s}.0") }
}

fn format_duration(d: Duration) -> String {
    let total = d.num_seconds();
    let days = total.div_euclid(86_400);
    let rest = total.rem_euclid(86_400);
    format!(
        "{} days {:02}:{:02}:{:02}",
        days,
        rest / 3600,
        (rest % 3600) / 60,
        rest % 60
    )
}

// Keeps a multi-line cell on one table row
fn escape_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use calamine::CellErrorType;

    #[test]
    fn test_whole_floats_become_ints() {
        assert_eq!(CellValue::from(&Data::Float(42.0)), CellValue::Int(42));
        assert_eq!(CellValue::from(&Data::Float(-3.0)), CellValue::Int(-3));
        assert_eq!(CellValue::from(&Data::Float(2.5)), CellValue::Float(2.5));
    }

    #[test]
    fn test_display_scalars() {
        assert_eq!(CellValue::Empty.to_string(), "NaN");
        assert_eq!(CellValue::Int(7).to_string(), "7");
        assert_eq!(CellValue::Bool(true).to_string(), "True");
        assert_eq!(CellValue::Bool(false).to_string(), "False");
        assert_eq!(CellValue::Text("hello".into()).to_string(), "hello");
    }

    #[test]
    fn test_display_floats() {
        assert_eq!(CellValue::Float(3.25).to_string(), "3.25");
        assert_eq!(CellValue::Float(0.1).to_string(), "0.1");
        assert_eq!(CellValue::Float(1e20).to_string(), "1e+20");
        assert_eq!(CellValue::Float(1.5e-7).to_string(), "1.5e-07");
        assert_eq!(CellValue::Float(f64::NAN).to_string(), "NaN");
        assert_eq!(CellValue::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_display_escapes_line_breaks() {
        let cell = CellValue::Text("line one\nline two\r\n".into());
        assert_eq!(cell.to_string(), "line one\\nline two\\r\\n");
    }

    #[test]
    fn test_display_dates_and_durations() {
        let dt = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(dt).to_string(), "2024-09-01 08:30:00");
        assert_eq!(
            CellValue::Duration(Duration::seconds(90_061)).to_string(),
            "1 days 01:01:01"
        );
    }

    #[test]
    fn test_iso_datetime_parsing() {
        let cell = CellValue::from(&Data::DateTimeIso("2023-05-04T10:00:00".into()));
        assert_eq!(cell.to_string(), "2023-05-04 10:00:00");

        let cell = CellValue::from(&Data::DateTimeIso("2023-05-04".into()));
        assert_eq!(cell.to_string(), "2023-05-04 00:00:00");

        let cell = CellValue::from(&Data::DateTimeIso("not a date".into()));
        assert_eq!(cell, CellValue::Text("not a date".into()));
    }

    #[test]
    fn test_error_cells() {
        let cell = CellValue::from(&Data::Error(CellErrorType::Div0));
        assert_eq!(cell.to_string(), "#DIV/0!");
    }

    #[test]
    fn test_header_label() {
        assert_eq!(CellValue::Empty.header_label(), None);
        assert_eq!(CellValue::Text(String::new()).header_label(), None);
        assert_eq!(CellValue::Int(2024).header_label(), Some("2024".into()));
    }
}
