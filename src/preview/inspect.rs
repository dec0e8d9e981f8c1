use serde_json::json;

use crate::excel::{CellValue, Sheet};
use crate::utils::cell_reference;

/// Report every cell with a truthy value in the first `rows` data rows: its
/// raw text and how that text breaks into lines. Blanks, empty text, zero and
/// `false` are skipped. Rows are counted from the header row (row 0),
/// columns from 0.
pub fn render_cell_report(sheet: &Sheet, rows: usize) -> String {
    let (origin_row, origin_col) = sheet.start;
    let mut out = String::new();

    for (row_idx, row) in sheet.head(rows).iter().enumerate() {
        let row_num = row_idx + 1;
        for (col_idx, cell) in row.iter().enumerate() {
            if is_falsy(cell) {
                continue;
            }

            let raw = raw_text(cell);
            let reference = cell_reference(
                origin_row as usize + row_num,
                origin_col as usize + col_idx,
            );

            out.push_str(&format!("\nCell [{row_num},{col_idx}] {reference}:\n"));
            out.push_str(&format!("Raw: {}\n", json!(raw)));
            out.push_str(&format!("Lines: {}\n", json!(split_lines(&raw))));
        }
    }

    out
}

fn is_falsy(cell: &CellValue) -> bool {
    match cell {
        CellValue::Empty | CellValue::Bool(false) | CellValue::Int(0) => true,
        CellValue::Float(f) => *f == 0.0 || f.is_nan(),
        CellValue::Text(s) => s.is_empty(),
        _ => false,
    }
}

fn raw_text(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.clone(),
        other => other.to_string(),
    }
}

fn split_lines(s: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = s;

    while let Some(pos) = rest.find(['\r', '\n']) {
        lines.push(&rest[..pos]);
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + skip..];
    }
    lines.push(rest);

    lines
}
