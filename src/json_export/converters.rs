use serde_json::{Value, json};

use crate::excel::CellValue;

// Process cell value based on its type
pub fn process_cell_value(cell: &CellValue) -> Value {
    match cell {
        CellValue::Empty => Value::Null,
        CellValue::Int(i) => json!(i),
        // NaN and infinities have no JSON number form
        CellValue::Float(f) if f.is_finite() => json!(f),
        CellValue::Bool(b) => json!(b),
        CellValue::Text(s) => json!(s),
        CellValue::DateTime(dt) => json!(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
        other => json!(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    #[test]
    fn test_scalar_values() {
        assert_eq!(process_cell_value(&CellValue::Empty), Value::Null);
        assert_eq!(process_cell_value(&CellValue::Int(3)), json!(3));
        assert_eq!(process_cell_value(&CellValue::Float(2.5)), json!(2.5));
        assert_eq!(process_cell_value(&CellValue::Bool(false)), json!(false));
        assert_eq!(
            process_cell_value(&CellValue::Text("a\nb".into())),
            json!("a\nb")
        );
    }

    #[test]
    fn test_non_json_numbers_become_text() {
        assert_eq!(process_cell_value(&CellValue::Float(f64::NAN)), json!("NaN"));
        assert_eq!(
            process_cell_value(&CellValue::Float(f64::INFINITY)),
            json!("inf")
        );
    }

    #[test]
    fn test_temporal_values() {
        let dt = NaiveDate::from_ymd_opt(2025, 1, 31)
            .unwrap()
            .and_hms_opt(12, 0, 5)
            .unwrap();
        assert_eq!(
            process_cell_value(&CellValue::DateTime(dt)),
            json!("2025-01-31T12:00:05")
        );
        assert_eq!(
            process_cell_value(&CellValue::Duration(Duration::minutes(90))),
            json!("0 days 01:30:00")
        );
    }
}
