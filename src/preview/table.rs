use crate::excel::{CellValue, Sheet};

const COLUMN_GAP: &str = "  ";

/// Render the first `rows` data rows of `sheet` as an aligned text table:
/// a header line, then one line per row led by its 0-based index.
pub fn render_table(sheet: &Sheet, rows: usize) -> String {
    let headers = sheet.column_names();
    let head = sheet.head(rows);

    if head.is_empty() {
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            headers.join(", ")
        );
    }

    let float_columns = sheet.float_columns();
    let cells: Vec<Vec<String>> = head
        .iter()
        .map(|row| {
            row.iter()
                .zip(&float_columns)
                .map(|(cell, as_float)| render_cell(cell, *as_float))
                .collect()
        })
        .collect();

    let index_labels: Vec<String> = (0..head.len()).map(|i| i.to_string()).collect();
    let index_width = index_labels.iter().map(|s| display_width(s)).max().unwrap_or(0);

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col_idx, header)| {
            cells
                .iter()
                .filter_map(|row| row.get(col_idx))
                .map(|s| display_width(s))
                .chain(std::iter::once(display_width(header)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(head.len() + 1);

    let mut header_line = " ".repeat(index_width);
    for (header, width) in headers.iter().zip(&widths) {
        header_line.push_str(COLUMN_GAP);
        header_line.push_str(&pad_left(header, *width));
    }
    lines.push(header_line);

    for (label, row) in index_labels.iter().zip(&cells) {
        let mut line = pad_right(label, index_width);
        for (value, width) in row.iter().zip(&widths) {
            line.push_str(COLUMN_GAP);
            line.push_str(&pad_left(value, *width));
        }
        lines.push(line);
    }

    lines.join("\n")
}

// Integers in a float column print as floats (`3.0`)
fn render_cell(cell: &CellValue, as_float: bool) -> String {
    match cell {
        CellValue::Int(i) if as_float => CellValue::Float(*i as f64).to_string(),
        other => other.to_string(),
    }
}

// Width in characters, so non-ASCII names line up with their values
fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}
